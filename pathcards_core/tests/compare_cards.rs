//! End-to-end comparison of JSON card collections.

use pathcards_core::{Card, CardComparator, ComparisonSummary, MatchType};
use serde_json::{Value, json};

fn parse(value: &Value) -> Vec<Card> {
    #[expect(clippy::expect_used, reason = "test: fixtures are well-formed")]
    Card::parse_collection(&value.to_string()).expect("fixtures are well-formed")
}

fn model_cards() -> Vec<Card> {
    parse(&json!([
        {
            "source": "model",
            "extracted_information": {
                "participant_a": {"entity_type": "protein", "entity_text": "MEK1", "identifier": "Uniprot:MP2K1_HUMAN"},
                "participant_b": {"entity_type": "protein", "entity_text": "ERK2", "identifier": "Uniprot:MK01_HUMAN"},
                "interaction_type": "adds_modification",
                "modifications": [
                    {"modification_type": "Phosphorylation", "position": "185"},
                    {"modification_type": "Phosphorylation", "position": "187"}
                ]
            }
        },
        {
            "source": "model",
            "extracted_information": {
                "participant_a": [
                    {"entity_type": "protein", "entity_text": "CDK1", "identifier": "Uniprot:CDK1_HUMAN"},
                    {"entity_type": "protein", "entity_text": "CCNB1", "identifier": "Uniprot:CCNB1_HUMAN"}
                ],
                "participant_b": {"entity_type": "protein", "entity_text": "TP53", "identifier": "Uniprot:P53_HUMAN"},
                "interaction_type": "adds_modification",
                "modifications": [
                    {"modification_type": "Phosphorylation", "position": 315},
                    {"modification_type": "Acetylation"}
                ]
            }
        },
        {
            "source": "model",
            "extracted_information": {
                "participant_a": null,
                "participant_b": {"entity_type": "protein_family", "entity_text": "AKT",
                    "family_members": [
                        {"entity_type": "protein", "entity_text": "AKT1", "identifier": "Uniprot:AKT1_HUMAN"},
                        {"entity_type": "protein", "entity_text": "AKT2", "identifier": "Uniprot:AKT2_HUMAN"}
                    ]},
                "interaction_type": "adds_modification",
                "modifications": [{"modification_type": "Phosphorylation", "position": "308"}]
            }
        }
    ]))
}

#[test]
fn classifies_each_inference_card() {
    let inference = parse(&json!([
        {
            "pmc_id": "PMC1",
            "extracted_information": {
                "participant_a": {"entity_type": "protein", "entity_text": "MEK", "identifier": "Uniprot:MP2K1_HUMAN"},
                "participant_b": {"entity_type": "protein", "entity_text": "ERK", "identifier": "Uniprot:MK01_HUMAN"},
                "interaction_type": "adds_modification",
                "modifications": [
                    {"modification_type": "phosphorylation", "position": "186"},
                    {"modification_type": "phosphorylation", "position": "188"}
                ]
            }
        },
        {
            "pmc_id": "PMC2",
            "extracted_information": {
                "participant_a": null,
                "participant_b": {"entity_type": "protein", "entity_text": "p53", "identifier": "Uniprot:P53_HUMAN"},
                "interaction_type": "adds_modification",
                "modifications": [{"modification_type": "phosphorylation"}]
            }
        },
        {
            "pmc_id": "PMC3",
            "extracted_information": {
                "participant_a": null,
                "participant_b": {"entity_type": "protein", "entity_text": "AKT1", "identifier": "Uniprot:AKT1_HUMAN"},
                "interaction_type": "adds_modification",
                "modifications": [{"modification_type": "phosphorylation", "position": "473"}]
            }
        },
        {
            "pmc_id": "PMC4",
            "extracted_information": {
                "participant_a": null,
                "participant_b": {"entity_type": "protein", "entity_text": "ERK", "identifier": "Uniprot:MK01_HUMAN"},
                "interaction_type": "increases_activity"
            }
        }
    ]));

    let out = CardComparator::new().compare_cards(&model_cards(), &inference);
    assert_eq!(out.len(), 4);

    let verdicts: Vec<Option<Vec<MatchType>>> = out
        .iter()
        .map(|card| {
            card.matches
                .as_ref()
                .map(|m| m.iter().map(|v| v.match_type).collect())
        })
        .collect();

    assert_eq!(
        verdicts,
        vec![
            Some(vec![MatchType::Exact]),
            Some(vec![MatchType::Subset]),
            // AKT1 is indexed through the family, but the strict predicate
            // compares the family's own (missing) identifier
            None,
            None,
        ]
    );

    // order and untouched fields survive
    assert_eq!(out[0].extra.get("pmc_id"), Some(&json!("PMC1")));
    assert_eq!(out[3], inference[3]);

    let summary = ComparisonSummary::from_cards(&out);
    assert_eq!(summary.annotated, 2);
    assert_eq!(summary.count(MatchType::Exact), 1);
    assert_eq!(summary.count(MatchType::Subset), 1);
}

#[test]
fn annotated_output_embeds_matched_model_card() {
    let inference = parse(&json!([{
        "extracted_information": {
            "participant_b": {"entity_type": "protein", "entity_text": "ERK", "identifier": "Uniprot:MK01_HUMAN"},
            "interaction_type": "adds_modification",
            "modifications": [{"modification_type": "Ubiquitination", "position": "12"}]
        }
    }]));

    let out = CardComparator::new().compare_cards(&model_cards(), &inference);

    #[expect(clippy::expect_used, reason = "test: serialization cannot fail")]
    let value = serde_json::to_value(&out[0]).expect("serialization cannot fail");

    assert_eq!(value["match"][0]["type"], json!("DISTINCT"));
    assert_eq!(value["match"][0]["card"]["source"], json!("model"));
    assert_eq!(
        value["match"][0]["card"]["extracted_information"]["participant_b"]["identifier"],
        json!("Uniprot:MK01_HUMAN")
    );
}

#[test]
fn empty_collections_are_fine() {
    let comparator = CardComparator::new();
    assert!(comparator.compare_cards(&[], &[]).is_empty());

    let inference = model_cards();
    let out = comparator.compare_cards(&[], &inference);
    assert_eq!(out, inference);
}
