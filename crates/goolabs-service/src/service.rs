//! The seven analysis calls, each one validated request and one mapped reply

use crate::observer::CallContext;
use crate::registry::ObserverRegistry;
use goolabs_client::{Capability, Transport};
use goolabs_core::codec::{
    encode_bounded_int, encode_datetime, encode_enum, encode_filter_list,
};
use goolabs_core::request::require_texts;
use goolabs_core::{
    AnalyzedMorphology, CalculatedSimilarity, ConvertedToFurigana, CountArg, DateTimeArg, EnumArg,
    ExtractedKeywords, ExtractedNamedEntities, ExtractedSlotValues, FilterArg, GoolabsError,
    KanaType, KeywordFocusType, MorphemeInfoType, NamedEntityType, NormalizedTimes,
    PartOfSpeechType, Result, SlotType,
};
use goolabs_mapper as mapper;
use goolabs_telemetry::new_call_id;
use serde::Serialize;
use serde_json::{json, Map, Value};
use std::fmt::Debug;
use std::time::Instant;
use tracing::{info, warn};

/// Bounds of the keyword count accepted by the API
pub const MAX_NUM_RANGE: (i64, i64) = (1, 10);

/// Request parameters, skipping the ones that carry no value
#[derive(Debug, Default)]
struct Params(Map<String, Value>);

impl Params {
    fn text(mut self, key: &str, value: &str) -> Self {
        self.0.insert(key.to_string(), Value::String(value.to_string()));
        self
    }

    fn optional(mut self, key: &str, value: Option<impl Into<Value>>) -> Self {
        if let Some(value) = value {
            self.0.insert(key.to_string(), value.into());
        }
        self
    }
}

/// Caller argument as it appears in logs and call records
fn described<T: Debug>(value: Option<&T>) -> Value {
    value.map_or(Value::Null, |v| Value::String(format!("{v:?}")))
}

/// Client for the goo labs API over any [`Transport`]
pub struct GoolabsService<T> {
    transport: T,
    observers: ObserverRegistry,
}

impl<T: Transport> GoolabsService<T> {
    pub fn new(transport: T) -> Self {
        Self::with_observers(transport, ObserverRegistry::new())
    }

    pub fn with_observers(transport: T, observers: ObserverRegistry) -> Self {
        Self {
            transport,
            observers,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn observers(&self) -> &ObserverRegistry {
        &self.observers
    }

    pub fn observers_mut(&mut self) -> &mut ObserverRegistry {
        &mut self.observers
    }

    /// Logs and notifies around one call, returning its result unchanged
    fn observed<R: Serialize>(
        &self,
        method: &'static str,
        capability: Capability,
        arguments: Value,
        call: impl FnOnce() -> Result<R>,
    ) -> Result<R> {
        let call_id = new_call_id();
        let context = CallContext {
            call_id: &call_id,
            method,
            capability,
            arguments: &arguments,
        };
        info!(call_id = %call_id, arguments = %arguments, "{method} called");
        self.observers.on_call_start(&context);

        let started = Instant::now();
        let result = call();
        let elapsed = started.elapsed();

        match &result {
            Ok(record) => {
                let value = serde_json::to_value(record).unwrap_or(Value::Null);
                info!(
                    call_id = %call_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    result = %value,
                    "{method} returned"
                );
                self.observers.on_call_success(&context, &value, elapsed);
            }
            Err(error) => {
                warn!(
                    call_id = %call_id,
                    elapsed_ms = elapsed.as_millis() as u64,
                    kind = error.kind(),
                    "{method} raised {error}"
                );
                self.observers.on_call_failure(&context, error, elapsed);
            }
        }
        result
    }

    /// The one outbound request of a call
    fn send(&self, capability: Capability, params: Params) -> Result<Value> {
        self.transport
            .post(capability, &params.0)
            .map_err(GoolabsError::transport)
    }

    /// Normalize the time expressions of `sentence` against `doc_time`
    /// (the API uses the current time when it is absent).
    pub fn normalize_times(
        &self,
        sentence: &str,
        doc_time: Option<DateTimeArg>,
    ) -> Result<NormalizedTimes> {
        let arguments = json!({"sentence": sentence, "doc_time": described(doc_time.as_ref())});
        self.observed("normalize_times", Capability::Chrono, arguments, || {
            require_texts(&[("sentence", sentence)])?;
            let params = Params::default()
                .text("sentence", sentence)
                .optional("doc_time", encode_datetime(doc_time.as_ref())?);
            let response = self.send(Capability::Chrono, params)?;
            mapper::normalized_times(&response)
        })
    }

    /// Every named-entity class is reported when `class_filter` is absent.
    pub fn extract_named_entities(
        &self,
        sentence: &str,
        class_filter: Option<FilterArg<NamedEntityType>>,
    ) -> Result<ExtractedNamedEntities> {
        let arguments =
            json!({"sentence": sentence, "class_filter": described(class_filter.as_ref())});
        self.observed("extract_named_entities", Capability::Entity, arguments, || {
            require_texts(&[("sentence", sentence)])?;
            let params = Params::default()
                .text("sentence", sentence)
                .optional("class_filter", encode_filter_list(class_filter.as_ref())?);
            let echoed: &[&str] = if class_filter.is_some() {
                &["class_filter"]
            } else {
                &[]
            };
            let response = self.send(Capability::Entity, params)?;
            mapper::extracted_named_entities(&response, echoed)
        })
    }

    /// `output_type` defaults to hiragana.
    pub fn convert_to_furigana(
        &self,
        sentence: &str,
        output_type: Option<EnumArg<KanaType>>,
    ) -> Result<ConvertedToFurigana> {
        let output_type = output_type.unwrap_or(EnumArg::Member(KanaType::default()));
        let arguments =
            json!({"sentence": sentence, "output_type": described(Some(&output_type))});
        self.observed("convert_to_furigana", Capability::Hiragana, arguments, || {
            require_texts(&[("sentence", sentence)])?;
            let params = Params::default()
                .text("sentence", sentence)
                .optional("output_type", encode_enum(Some(&output_type), true)?);
            let response = self.send(Capability::Hiragana, params)?;
            mapper::converted_to_furigana(&response)
        })
    }

    /// `max_num` must lie in [`MAX_NUM_RANGE`] when given.
    pub fn extract_keywords(
        &self,
        title: &str,
        body: &str,
        max_num: Option<CountArg>,
        focus: Option<EnumArg<KeywordFocusType>>,
    ) -> Result<ExtractedKeywords> {
        let arguments = json!({
            "title": title,
            "body": body,
            "max_num": described(max_num.as_ref()),
            "focus": described(focus.as_ref()),
        });
        self.observed("extract_keywords", Capability::Keyword, arguments, || {
            require_texts(&[("title", title), ("body", body)])?;
            let (min, max) = MAX_NUM_RANGE;
            let params = Params::default()
                .text("title", title)
                .text("body", body)
                .optional("max_num", encode_bounded_int(max_num.as_ref(), min, max)?)
                .optional("focus", encode_enum(focus.as_ref(), false)?);
            let echoed: &[&str] = if focus.is_some() { &["focus"] } else { &[] };
            let response = self.send(Capability::Keyword, params)?;
            mapper::extracted_keywords(&response, echoed)
        })
    }

    /// A filter is expected back only when it is given and not blank.
    pub fn analyze_morphology(
        &self,
        sentence: &str,
        info_filter: Option<FilterArg<MorphemeInfoType>>,
        pos_filter: Option<FilterArg<PartOfSpeechType>>,
    ) -> Result<AnalyzedMorphology> {
        let arguments = json!({
            "sentence": sentence,
            "info_filter": described(info_filter.as_ref()),
            "pos_filter": described(pos_filter.as_ref()),
        });
        self.observed("analyze_morphology", Capability::Morph, arguments, || {
            require_texts(&[("sentence", sentence)])?;
            let params = Params::default()
                .text("sentence", sentence)
                .optional("info_filter", encode_filter_list(info_filter.as_ref())?)
                .optional("pos_filter", encode_filter_list(pos_filter.as_ref())?);

            let mut echoed = Vec::new();
            if info_filter.as_ref().is_some_and(|f| !f.is_blank()) {
                echoed.push("info_filter");
            }
            if pos_filter.as_ref().is_some_and(|f| !f.is_blank()) {
                echoed.push("pos_filter");
            }
            let response = self.send(Capability::Morph, params)?;
            mapper::analyzed_morphology(&response, &echoed)
        })
    }

    /// Every slot type is reported when `slot_filter` is absent.
    pub fn extract_slot_values(
        &self,
        sentence: &str,
        slot_filter: Option<FilterArg<SlotType>>,
    ) -> Result<ExtractedSlotValues> {
        let arguments =
            json!({"sentence": sentence, "slot_filter": described(slot_filter.as_ref())});
        self.observed("extract_slot_values", Capability::Slot, arguments, || {
            require_texts(&[("sentence", sentence)])?;
            let params = Params::default()
                .text("sentence", sentence)
                .optional("slot_filter", encode_filter_list(slot_filter.as_ref())?);
            let echoed: &[&str] = if slot_filter.is_some() {
                &["slot_filter"]
            } else {
                &[]
            };
            let response = self.send(Capability::Slot, params)?;
            mapper::extracted_slot_values(&response, echoed)
        })
    }

    pub fn calculate_similarity(&self, text1: &str, text2: &str) -> Result<CalculatedSimilarity> {
        let arguments = json!({"text1": text1, "text2": text2});
        self.observed("calculate_similarity", Capability::Textpair, arguments, || {
            require_texts(&[("text1", text1), ("text2", text2)])?;
            let params = Params::default().text("text1", text1).text("text2", text2);
            let response = self.send(Capability::Textpair, params)?;
            mapper::calculated_similarity(&response)
        })
    }
}
