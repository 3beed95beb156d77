use crate::cli::Commands;
use crate::display::{self, Panel};
use crate::translator::Translator;
use anyhow::{bail, Context};
use goolabs_client::{HttpTransport, Transport};
use goolabs_core::{
    ClientConfig, EnumArg, FilterArg, LoggingConfig, PartOfSpeechType, PosCategory, WordClass,
};
use goolabs_service::{GoolabsService, JsonlObserver, ObserverRegistry, TracingObserver};
use goolabs_telemetry::Paths;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// How results are printed
pub struct Output {
    json: bool,
    translator: Translator,
}

impl Output {
    pub fn new(json: bool, lang: &str, translations: Option<&Path>) -> anyhow::Result<Self> {
        let translator = match translations {
            Some(path) => Translator::with_file(lang, path)?,
            None => Translator::new(lang),
        };
        Ok(Self { json, translator })
    }

    fn render<R: Serialize>(
        &self,
        record: &R,
        panel: impl FnOnce(&Translator) -> Panel,
    ) -> anyhow::Result<String> {
        if self.json {
            Ok(serde_json::to_string_pretty(record)?)
        } else {
            Ok(panel(&self.translator).to_string())
        }
    }
}

/// Service over HTTP, configured from the environment
pub fn connect() -> anyhow::Result<GoolabsService<HttpTransport>> {
    let config = ClientConfig::from_env()?;
    let logging = LoggingConfig::from_env();
    let transport = HttpTransport::new(config).context("building HTTP client")?;

    let mut observers = ObserverRegistry::new();
    observers.register(Box::new(TracingObserver));
    match Paths::new() {
        Ok(paths) => observers.register(Box::new(JsonlObserver::from_config(&paths, &logging))),
        Err(e) => tracing::warn!("call log disabled: {e}"),
    }
    Ok(GoolabsService::with_observers(transport, observers))
}

/// The argument, or all of stdin when it was left out or given as `-`
fn input(argument: Option<String>, stdin: impl Read) -> anyhow::Result<String> {
    let text = match argument.filter(|arg| arg != "-") {
        Some(text) => text,
        None => std::io::read_to_string(stdin).context("reading stdin")?,
    };
    let text = text.trim().to_string();
    if text.is_empty() {
        bail!("no sentence given");
    }
    Ok(text)
}

pub fn run<T: Transport>(
    service: &GoolabsService<T>,
    output: &Output,
    command: Commands,
) -> anyhow::Result<String> {
    run_with_stdin(service, output, command, std::io::stdin())
}

fn run_with_stdin<T: Transport>(
    service: &GoolabsService<T>,
    output: &Output,
    command: Commands,
    stdin: impl Read,
) -> anyhow::Result<String> {
    match command {
        Commands::Chrono { sentence, doc_time } => {
            let sentence = input(sentence, stdin)?;
            let result = service.normalize_times(&sentence, doc_time.map(Into::into))?;
            output.render(&result, |tr| display::times(tr, &result, &sentence))
        }
        Commands::Entities {
            sentence,
            class_filter,
        } => {
            let sentence = input(sentence, stdin)?;
            let result = service.extract_named_entities(&sentence, class_filter.map(Into::into))?;
            output.render(&result, |tr| display::named_entities(tr, &result, &sentence))
        }
        Commands::Furigana {
            sentence,
            output_type,
        } => {
            let sentence = input(sentence, stdin)?;
            let result = service.convert_to_furigana(&sentence, Some(EnumArg::from(output_type)))?;
            output.render(&result, |tr| display::furigana(tr, &result, &sentence))
        }
        Commands::Keywords {
            title,
            body,
            max_num,
            focus,
        } => {
            let body = input(body, stdin)?;
            let result = service.extract_keywords(
                &title,
                &body,
                max_num.map(Into::into),
                focus.map(Into::into),
            )?;
            output.render(&result, |tr| display::keywords(tr, &result, &title))
        }
        Commands::Morph {
            sentence,
            info_filter,
            pos_filter,
            words,
            category,
        } => {
            let sentence = input(sentence, stdin)?;
            let class = words.map(WordClass::from);
            // Word grouping only needs the parts of speech of its class
            let pos_filter: Option<FilterArg<PartOfSpeechType>> = pos_filter
                .map(Into::into)
                .or_else(|| class.map(|c| c.pos_filter().into()))
                .or_else(|| category.map(|c| PosCategory::from(c).pos_filter().into()));
            let result =
                service.analyze_morphology(&sentence, info_filter.map(Into::into), pos_filter)?;
            output.render(&result, |tr| match class {
                Some(class) => display::words(tr, &result, class, &sentence),
                None => display::morphology(tr, &result, &sentence),
            })
        }
        Commands::Slots {
            sentence,
            slot_filter,
        } => {
            let sentence = input(sentence, stdin)?;
            let result = service.extract_slot_values(&sentence, slot_filter.map(Into::into))?;
            output.render(&result, |tr| display::slots(tr, &result, &sentence))
        }
        Commands::Similarity { text1, text2 } => {
            let result = service.calculate_similarity(&text1, &text2)?;
            output.render(&result, |tr| display::similarity(tr, &result, &text1, &text2))
        }
        Commands::History { .. } | Commands::Version => bail!("not an analysis command"),
    }
}
