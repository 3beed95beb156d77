//! Response mappers for the times, entity, furigana, keyword, morph and
//! similarity endpoints

use crate::schema::{JsonKind, Schema};
use crate::shape::{
    as_float, as_optional_text, echoed_str, field_list, field_str, string_pair, unexpected,
};
use goolabs_core::codec::{decode_enum_or_none, decode_filter_list_or_all};
use goolabs_core::{
    AnalyzedMorpheme, AnalyzedMorphology, AnalyzedSentence, CalculatedSimilarity,
    ConvertedToFurigana, ExtractedKeywords, ExtractedNamedEntities, GoolabsDatetime, GoolabsError,
    KanaType, Keyword, KeywordFocusType, MorphemeInfoType, NamedEntity, NamedEntityType,
    NormalizedTime, NormalizedTimes, PartOfSpeechType, Result, WireEnum,
};
use serde_json::Value;

pub const NORMALIZED_TIMES: Schema = Schema {
    mapper: "normalized_times",
    required: &[("doc_time", JsonKind::String), ("datetime_list", JsonKind::List)],
    optional: &[],
};

pub const EXTRACTED_NAMED_ENTITIES: Schema = Schema {
    mapper: "extracted_named_entities",
    required: &[("ne_list", JsonKind::List)],
    optional: &[("class_filter", JsonKind::String)],
};

pub const CONVERTED_TO_FURIGANA: Schema = Schema {
    mapper: "converted_to_furigana",
    required: &[("output_type", JsonKind::String), ("converted", JsonKind::String)],
    optional: &[],
};

pub const EXTRACTED_KEYWORDS: Schema = Schema {
    mapper: "extracted_keywords",
    required: &[("keywords", JsonKind::List)],
    optional: &[("focus", JsonKind::String)],
};

pub const ANALYZED_MORPHOLOGY: Schema = Schema {
    mapper: "analyzed_morphology",
    required: &[("word_list", JsonKind::List)],
    optional: &[
        ("info_filter", JsonKind::String),
        ("pos_filter", JsonKind::String),
    ],
};

pub const CALCULATED_SIMILARITY: Schema = Schema {
    mapper: "calculated_similarity",
    required: &[("score", JsonKind::Float)],
    optional: &[],
};

fn datetime(text: &str) -> Result<GoolabsDatetime> {
    GoolabsDatetime::parse(text)
        .map_err(|e| GoolabsError::unexpected_response(format!("time {text:?}: {e}")))
}

fn normalized_time(item: &Value) -> Result<NormalizedTime> {
    let (text, time) = string_pair("time entity", item)?;
    Ok(NormalizedTime {
        text: text.to_string(),
        time: datetime(time)?,
    })
}

pub fn normalized_times(response: &Value) -> Result<NormalizedTimes> {
    NORMALIZED_TIMES.map(response, &[], |body| {
        let doc_time = datetime(field_str(body, "doc_time")?)?;
        let entries = field_list(body, "datetime_list")?
            .iter()
            .map(normalized_time)
            .collect::<Result<Vec<_>>>()?;
        Ok(NormalizedTimes { entries, doc_time })
    })
}

fn named_entity(item: &Value) -> Result<NamedEntity> {
    let (text, class) = string_pair("named entity", item)?;
    let entity_type =
        NamedEntityType::from_wire(class).ok_or_else(|| unexpected("named entity", item))?;
    Ok(NamedEntity {
        text: text.to_string(),
        entity_type,
    })
}

pub fn extracted_named_entities(
    response: &Value,
    echoed: &[&str],
) -> Result<ExtractedNamedEntities> {
    EXTRACTED_NAMED_ENTITIES.map(response, echoed, |body| {
        let class_filter = decode_filter_list_or_all(echoed_str(body, "class_filter"))?;
        let entities = field_list(body, "ne_list")?
            .iter()
            .map(named_entity)
            .collect::<Result<Vec<_>>>()?;
        Ok(ExtractedNamedEntities {
            entities,
            class_filter,
        })
    })
}

pub fn converted_to_furigana(response: &Value) -> Result<ConvertedToFurigana> {
    CONVERTED_TO_FURIGANA.map(response, &[], |body| {
        let output_type = field_str(body, "output_type")?;
        let kana_type = KanaType::from_wire(output_type).ok_or_else(|| {
            GoolabsError::unexpected_response(format!(
                "output_type {output_type:?} is not a kana type"
            ))
        })?;
        Ok(ConvertedToFurigana {
            text: field_str(body, "converted")?.to_string(),
            kana_type,
        })
    })
}

/// `{text: score}` with exactly one entry
fn keyword(item: &Value) -> Result<Keyword> {
    let Some(object) = item.as_object().filter(|o| o.len() == 1) else {
        return Err(unexpected("keyword entity", item));
    };
    let Some((text, score)) = object.iter().next() else {
        return Err(unexpected("keyword entity", item));
    };
    Ok(Keyword {
        text: text.clone(),
        score: as_float("keyword entity", item, score)?,
    })
}

pub fn extracted_keywords(response: &Value, echoed: &[&str]) -> Result<ExtractedKeywords> {
    EXTRACTED_KEYWORDS.map(response, echoed, |body| {
        let focus = decode_enum_or_none::<KeywordFocusType>(echoed_str(body, "focus"))?;
        let keywords = field_list(body, "keywords")?
            .iter()
            .map(keyword)
            .collect::<Result<Vec<_>>>()?;
        Ok(ExtractedKeywords { keywords, focus })
    })
}

/// Fields are assigned positionally, following the info filter
fn analyzed_morpheme(info_filter: &[MorphemeInfoType], item: &Value) -> Result<AnalyzedMorpheme> {
    let fields = match item.as_array() {
        Some(fields) if fields.len() == info_filter.len() => fields,
        _ => return Err(unexpected("morpheme entity", item)),
    };

    let mut morpheme = AnalyzedMorpheme::default();
    for (info, value) in info_filter.iter().zip(fields) {
        let text = as_optional_text("morpheme entity", item, value)?;
        match info {
            MorphemeInfoType::Form => morpheme.form = text.map(str::to_string),
            MorphemeInfoType::PartOfSpeech => {
                morpheme.pos = decode_enum_or_none::<PartOfSpeechType>(text)?
            }
            MorphemeInfoType::Read => morpheme.read = text.map(str::to_string),
        }
    }
    Ok(morpheme)
}

fn analyzed_sentence(info_filter: &[MorphemeInfoType], item: &Value) -> Result<AnalyzedSentence> {
    let morphemes = item.as_array().ok_or_else(|| {
        GoolabsError::unexpected_response(format!("sentence entity {item} is not a list"))
    })?;
    morphemes
        .iter()
        .map(|morpheme| analyzed_morpheme(info_filter, morpheme))
        .collect()
}

pub fn analyzed_morphology(response: &Value, echoed: &[&str]) -> Result<AnalyzedMorphology> {
    ANALYZED_MORPHOLOGY.map(response, echoed, |body| {
        let info_filter: Vec<MorphemeInfoType> =
            decode_filter_list_or_all(echoed_str(body, "info_filter"))?;
        let pos_filter: Vec<PartOfSpeechType> =
            decode_filter_list_or_all(echoed_str(body, "pos_filter"))?;
        let sentences = field_list(body, "word_list")?
            .iter()
            .map(|sentence| analyzed_sentence(&info_filter, sentence))
            .collect::<Result<Vec<_>>>()?;
        Ok(AnalyzedMorphology {
            sentences,
            info_filter,
            pos_filter,
        })
    })
}

pub fn calculated_similarity(response: &Value) -> Result<CalculatedSimilarity> {
    CALCULATED_SIMILARITY.map(response, &[], |body| {
        let score = body.get("score").and_then(Value::as_f64).ok_or_else(|| {
            GoolabsError::unexpected_response("score is not a float")
        })?;
        Ok(CalculatedSimilarity { score })
    })
}
