use serde_json::{Map, Value as JsonValue};

use super::model::SpacerList;
use crate::error::ExtractError;

/// Region `Type` that marks a spacer.
pub const SPACER_TYPE: &str = "Spacer";

/// Collect every spacer sequence of a CRISPRCasFinder result, in document order.
///
/// Walks `Sequences[*].Crisprs[*].Regions[*]` and keeps the `Sequence` of each
/// region whose `Type` is `"Spacer"`. Duplicates are kept so they can be
/// counted. Any missing key along the way is an error naming the JSON path,
/// written from the root `$`, e.g. `$.Sequences[0].Crisprs`.
pub fn extract_spacers(doc: &JsonValue) -> Result<SpacerList, ExtractError> {
    let mut spacers = Vec::new();
    let root = as_object(doc, "$")?;

    for (i, sequence) in as_array(field(root, "Sequences", "$")?, "$.Sequences")?
        .iter()
        .enumerate()
    {
        let at = format!("$.Sequences[{i}]");
        let sequence = as_object(sequence, &at)?;
        let crisprs_at = format!("{at}.Crisprs");
        let crisprs = as_array(field(sequence, "Crisprs", &at)?, &crisprs_at)?;

        for (j, crispr) in crisprs.iter().enumerate() {
            let at = format!("{crisprs_at}[{j}]");
            let crispr = as_object(crispr, &at)?;
            let regions_at = format!("{at}.Regions");
            let regions = as_array(field(crispr, "Regions", &at)?, &regions_at)?;

            for (k, region) in regions.iter().enumerate() {
                let at = format!("{regions_at}[{k}]");
                let region = as_object(region, &at)?;
                if field(region, "Type", &at)?.as_str() != Some(SPACER_TYPE) {
                    continue;
                }
                spacers.push(sequence_text(field(region, "Sequence", &at)?));
            }
        }
    }

    Ok(spacers)
}

/// A `Sequence` as it appears in the table: strings verbatim, `null` as an
/// empty cell, anything else as its JSON text.
fn sequence_text(val: &JsonValue) -> String {
    match val {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}

fn field<'a>(
    obj: &'a Map<String, JsonValue>,
    key: &'static str,
    at: &str,
) -> Result<&'a JsonValue, ExtractError> {
    obj.get(key).ok_or_else(|| ExtractError::MissingKey {
        key,
        at: at.to_string(),
    })
}

fn as_object<'a>(val: &'a JsonValue, at: &str) -> Result<&'a Map<String, JsonValue>, ExtractError> {
    val.as_object().ok_or_else(|| ExtractError::WrongKind {
        expected: "an object",
        at: at.to_string(),
    })
}

fn as_array<'a>(val: &'a JsonValue, at: &str) -> Result<&'a Vec<JsonValue>, ExtractError> {
    val.as_array().ok_or_else(|| ExtractError::WrongKind {
        expected: "an array",
        at: at.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn region(kind: &str, seq: &str) -> JsonValue {
        json!({ "Type": kind, "Sequence": seq, "Start": 1, "End": 30 })
    }

    #[test]
    fn no_spacer_regions_gives_empty_list() {
        let doc = json!({
            "Sequences": [
                { "Id": "contig_1", "Crisprs": [] },
                { "Id": "contig_2", "Crisprs": [
                    { "Name": "contig_2_1", "Regions": [region("LeftFLANK", "AAAA"), region("DR", "GTTG")] }
                ]}
            ]
        });
        assert!(extract_spacers(&doc).unwrap().is_empty());
        assert!(extract_spacers(&json!({ "Sequences": [] })).unwrap().is_empty());
    }

    #[test]
    fn only_spacers_are_kept_in_document_order() {
        let doc = json!({
            "Sequences": [
                { "Crisprs": [
                    { "Regions": [
                        region("DR", "GTTG"),
                        region("Spacer", "ACGT"),
                        region("DR", "GTTG"),
                        region("Spacer", "TTTT"),
                        region("DR", "GTTG"),
                    ]},
                    { "Regions": [region("Spacer", "ACGT"), region("RightFLANK", "CCCC")] }
                ]},
                { "Crisprs": [
                    { "Regions": [region("Spacer", "GGGA")] }
                ]}
            ]
        });
        assert_eq!(
            extract_spacers(&doc).unwrap(),
            vec!["ACGT", "TTTT", "ACGT", "GGGA"]
        );
    }

    #[test]
    fn type_match_is_exact() {
        let doc = json!({
            "Sequences": [{ "Crisprs": [{ "Regions": [
                region("spacer", "AAAA"),
                { "Type": 7, "Sequence": "CCCC" },
                region("Spacer", "GGGG"),
            ]}]}]
        });
        assert_eq!(extract_spacers(&doc).unwrap(), vec!["GGGG"]);
    }

    #[test]
    fn missing_key_names_its_location() {
        let doc = json!({ "Sequences": [{ "Crisprs": [{ "Name": "no regions" }] }] });
        assert_eq!(
            extract_spacers(&doc).unwrap_err(),
            ExtractError::MissingKey {
                key: "Regions",
                at: "$.Sequences[0].Crisprs[0]".to_string()
            }
        );

        let err = extract_spacers(&json!({ "Crisprs": [] })).unwrap_err();
        assert_eq!(err.to_string(), "missing key 'Sequences' at $");
    }

    #[test]
    fn spacer_without_sequence_is_an_error_but_dr_is_not() {
        let ok = json!({ "Sequences": [{ "Crisprs": [{ "Regions": [{ "Type": "DR" }] }] }] });
        assert!(extract_spacers(&ok).unwrap().is_empty());

        let bad = json!({ "Sequences": [{ "Crisprs": [{ "Regions": [{ "Type": "Spacer" }] }] }] });
        assert!(matches!(
            extract_spacers(&bad),
            Err(ExtractError::MissingKey { key: "Sequence", .. })
        ));
    }

    #[test]
    fn non_string_sequences_are_counted_as_json_text() {
        let doc = json!({ "Sequences": [{ "Crisprs": [{ "Regions": [
            { "Type": "Spacer", "Sequence": 1234 },
            { "Type": "Spacer", "Sequence": "ACGT" },
            { "Type": "Spacer", "Sequence": null },
            { "Type": "Spacer", "Sequence": 1234 },
        ]}]}]});
        assert_eq!(
            extract_spacers(&doc).unwrap(),
            vec!["1234", "ACGT", "", "1234"]
        );
    }

    #[test]
    fn wrong_container_kind_is_an_error() {
        let doc = json!({ "Sequences": { "Crisprs": [] } });
        assert_eq!(
            extract_spacers(&doc).unwrap_err(),
            ExtractError::WrongKind {
                expected: "an array",
                at: "$.Sequences".to_string()
            }
        );
        assert!(extract_spacers(&json!([1, 2, 3])).is_err());
    }
}
