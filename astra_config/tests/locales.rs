use assay::assay;
use astra_config::locale::{self, assemble, MessageFragment};
use std::collections::HashMap;

fn fragment(name: &str, pairs: &[(&str, &str)]) -> MessageFragment {
    let messages: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

    MessageFragment::new(name, messages)
}

#[assay]
fn flattening_is_last_write_wins() {
    let a = fragment("a", &[("k1", "v1")]);
    let b = fragment("b", &[("k1", "v2"), ("k2", "v2b")]);
    let c = fragment("c", &[("k3", "v3")]);

    let bundle = assemble("en", vec![a, b, c]);

    let expected: HashMap<String, String> = [("k1", "v2"), ("k2", "v2b"), ("k3", "v3")]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    assert_eq!(bundle.messages(), &expected);
}

#[assay]
fn reversing_fragments_flips_only_shared_keys() {
    let a = fragment("a", &[("shared", "a wins"), ("a.only", "a")]);
    let b = fragment("b", &[("shared", "b wins"), ("b.only", "b")]);

    let ab = assemble("en", vec![a.clone(), b.clone()]);
    let ba = assemble("en", vec![b, a]);

    assert_eq!(ab.get("shared"), Some("b wins"));
    assert_eq!(ba.get("shared"), Some("a wins"));
    assert_eq!(ab.get("a.only"), ba.get("a.only"));
    assert_eq!(ab.get("b.only"), ba.get("b.only"));
    assert_eq!(ab.len(), ba.len());
}

#[assay]
fn bundles_expose_both_access_patterns() {
    let bundle = locale::english_bundle().unwrap();

    // itemized form keeps the merge order
    let names: Vec<&str> = bundle
        .fragments()
        .iter()
        .map(|fragment| fragment.name.as_str())
        .collect();
    assert_eq!(
        names,
        vec!["common", "account", "staking", "transfer", "astra"]
    );

    // flattened form resolves collisions toward the later fragment
    assert_eq!(bundle.get("app.name"), Some("Astra Wallet"));
    assert_eq!(bundle.get("transfer.title"), Some("Send ASA"));
    assert_eq!(bundle.get("common.button.cancel"), Some("Cancel"));
}

#[assay]
fn vietnamese_bundle_is_translated() {
    let bundle = locale::vietnamese_bundle().unwrap();

    assert_eq!(bundle.get("app.name"), Some("Ví Astra"));
    assert_eq!(bundle.get("common.button.cancel"), Some("Hủy"));
    assert_eq!(bundle.get("transfer.title"), Some("Gửi ASA"));
}

#[assay]
fn supported_locales_resolve_and_others_do_not() {
    for code in locale::SUPPORTED_LOCALES {
        let bundle = locale::bundle(code).unwrap();
        assert_eq!(bundle.locale(), *code);
        assert!(!bundle.is_empty());
    }

    locale::bundle("ja").unwrap_err();
    locale::bundle("").unwrap_err();
}

#[assay]
fn locales_may_carry_different_key_sets() {
    let english = locale::english_bundle().unwrap();
    let vietnamese = locale::vietnamese_bundle().unwrap();

    assert!(english.contains_key("staking.disclaimer"));
    assert!(!vietnamese.contains_key("staking.disclaimer"));
}

#[assay]
fn assembly_is_deterministic() {
    let first = locale::english_bundle().unwrap();
    let second = locale::english_bundle().unwrap();

    assert_eq!(first, second);
}
