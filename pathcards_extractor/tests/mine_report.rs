use pathcards_extractor::report::HEADER;
use pathcards_extractor::{
    Blacklist, MinerKind, ModificationCardMiner, PrecomputedSearcher, write_report,
};

const MATCHES: &str = r#"{
    "controls_state_change": {
        "Control_1": [{
            "controller ER": {"element": "reference", "id": "er_mek", "kind": "protein", "names": ["MP2K1_HUMAN"]},
            "controller simple PE": {"element": "entity", "id": "mek", "kind": "protein", "cellular_location": "cytosol"},
            "changed ER": {"element": "reference", "id": "er_erk", "kind": "protein", "names": ["MK01_HUMAN"]},
            "input simple PE": {"element": "entity", "id": "erk", "kind": "protein", "cellular_location": "cytosol"},
            "output simple PE": {
                "element": "entity", "id": "erk_p", "kind": "protein", "cellular_location": "cytosol",
                "features": [
                    {"feature_type": "modification", "terms": ["O-phospho-L-threonine"], "location": {"type": "site", "position": 185}}
                ]
            },
            "Control": {"element": "interaction", "id": "ctrl1", "kind": "control", "control_type": "ACTIVATION"},
            "Conversion": {"element": "interaction", "id": "conv1", "kind": "conversion"}
        }]
    },
    "controls_state_change_through_controller_small_molecule": {
        "Control_2": [{
            "upper controller ER": {"element": "reference", "id": "er_pka", "kind": "protein", "names": ["KAPCA_HUMAN"]},
            "controller simple PE": {
                "element": "entity", "id": "atp", "kind": "small_molecule",
                "entity_reference": {"id": "SMR_ATP", "kind": "small_molecule"}
            },
            "changed ER": {"element": "reference", "id": "er_erk", "kind": "protein", "names": ["MK01_HUMAN"]},
            "input simple PE": {"element": "entity", "id": "erk", "kind": "protein"},
            "output simple PE": {
                "element": "entity", "id": "erk_p2", "kind": "protein",
                "features": [
                    {"feature_type": "modification", "terms": ["O-phospho-L-tyrosine"], "location": {"type": "site", "position": 187}}
                ]
            }
        }]
    }
}"#;

#[test]
fn mined_changes_reach_the_report() {
    #[expect(clippy::expect_used, reason = "test: fixture is valid JSON")]
    let searcher = PrecomputedSearcher::from_json(MATCHES).expect("fixture is valid JSON");
    let blacklist: Blacklist = ["SMR_ATP"].into_iter().collect();
    let mut miner = ModificationCardMiner::default().with_blacklist(blacklist);

    #[expect(clippy::expect_used, reason = "test: precomputed search cannot fail")]
    let stats = miner
        .mine_and_collect(&searcher)
        .expect("precomputed search cannot fail");
    assert_eq!(stats.matches, 1);
    assert_eq!(stats.changes, 1);

    let mut out = Vec::new();
    #[expect(clippy::expect_used, reason = "test: writing to a Vec cannot fail")]
    let rows = write_report(miner.table(), &mut out).expect("writing to a Vec cannot fail");
    assert_eq!(rows, 1);

    let text = String::from_utf8_lossy(&out);
    let mut lines = text.lines();
    assert_eq!(lines.next(), Some(HEADER));
    assert_eq!(
        lines.next(),
        Some(
            "Uniprot:MP2K1_HUMAN\tcontrols-state-change-of\tUniprot:MK01_HUMAN\t\tcytosol\tO-phospho-L-threonine@185\t\t\t\tconv1 ctrl1"
        )
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn small_molecule_miner_runs_without_blacklist() {
    #[expect(clippy::expect_used, reason = "test: fixture is valid JSON")]
    let searcher = PrecomputedSearcher::from_json(MATCHES).expect("fixture is valid JSON");
    let mut miner =
        ModificationCardMiner::new(vec![MinerKind::ControlsStateChangeThroughControllerSmallMolecule]);

    #[expect(clippy::expect_used, reason = "test: precomputed search cannot fail")]
    miner
        .mine_and_collect(&searcher)
        .expect("precomputed search cannot fail");

    let record = miner.table().get("Uniprot:KAPCA_HUMAN", "Uniprot:MK01_HUMAN");
    assert_eq!(
        record.map(|r| r.gained_modifications.iter().cloned().collect::<Vec<_>>()),
        Some(vec!["O-phospho-L-tyrosine@187".to_string()])
    );
    assert_eq!(record.map(|r| r.mediators.is_empty()), Some(true));
}

const RELOCATION: &str = r#"{
    "controls_state_change": {
        "Control_3": [{
            "controller ER": {"element": "reference", "id": "er_a", "kind": "protein", "names": ["A_HUMAN"]},
            "changed ER": {"element": "reference", "id": "er_b", "kind": "protein", "names": ["B_HUMAN"]},
            "input simple PE": {"element": "entity", "id": "b_cyto", "kind": "protein", "cellular_location": "cytosol"},
            "output simple PE": {"element": "entity", "id": "b_nuc", "kind": "protein", "cellular_location": "nucleus"},
            "Control": {"element": "interaction", "id": "c", "kind": "control", "control_type": "ACTIVATION"}
        }]
    }
}"#;

#[test]
fn relocation_without_modification_is_not_reported() {
    #[expect(clippy::expect_used, reason = "test: fixture is valid JSON")]
    let searcher = PrecomputedSearcher::from_json(RELOCATION).expect("fixture is valid JSON");
    let mut miner = ModificationCardMiner::new(vec![MinerKind::ControlsStateChange]);

    #[expect(clippy::expect_used, reason = "test: precomputed search cannot fail")]
    miner
        .mine_and_collect(&searcher)
        .expect("precomputed search cannot fail");

    let record = miner.table().get("Uniprot:A_HUMAN", "Uniprot:B_HUMAN");
    assert_eq!(record.map(|r| r.gained_locations.contains("nucleus")), Some(true));
    assert_eq!(record.map(|r| r.mediators.contains("c")), Some(true));

    let mut out = Vec::new();
    #[expect(clippy::expect_used, reason = "test: writing to a Vec cannot fail")]
    let rows = write_report(miner.table(), &mut out).expect("writing to a Vec cannot fail");
    assert_eq!(rows, 0);
    assert_eq!(String::from_utf8_lossy(&out), format!("{HEADER}\n"));
}
