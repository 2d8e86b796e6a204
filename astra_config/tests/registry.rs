use assay::assay;
use astra_config::{
    chain::{default_bech32_config, ChainRegistry},
    constants, Environment,
};
use std::collections::HashSet;

#[assay]
fn registry_has_unique_chain_ids() {
    let registry = ChainRegistry::build(Environment::Production).unwrap();

    let mut ids = HashSet::new();
    for chain in &registry {
        assert!(ids.insert(chain.chain_id.clone()));
    }
    assert_eq!(ids.len(), registry.len());
}

#[assay]
fn registry_iterates_in_declaration_order() {
    let registry = ChainRegistry::build(Environment::Production).unwrap();
    let names: Vec<&str> = registry
        .chains()
        .iter()
        .map(|chain| chain.chain_name.as_str())
        .collect();

    // mainnet first, then testnet, never alphabetical or otherwise reordered
    assert_eq!(names, vec!["Astra", "Astra Testnet"]);
}

#[assay]
fn building_twice_yields_equal_registries() {
    let first = ChainRegistry::build(Environment::Development).unwrap();
    let second = ChainRegistry::build(Environment::Development).unwrap();

    assert_eq!(first, second);
}

#[assay]
fn astra_prefix_set_is_exact() {
    let config = default_bech32_config("astra");

    assert_eq!(config.bech32_prefix_acc_addr, "astra");
    assert_eq!(config.bech32_prefix_acc_pub, "astrapub");
    assert_eq!(config.bech32_prefix_val_addr, "astravaloper");
    assert_eq!(config.bech32_prefix_val_pub, "astravaloperpub");
    assert_eq!(config.bech32_prefix_cons_addr, "astravalcons");
    assert_eq!(config.bech32_prefix_cons_pub, "astravalconspub");
}

#[assay]
fn registry_prefixes_come_from_the_derivation() {
    let registry = ChainRegistry::build(Environment::Production).unwrap();

    for chain in &registry {
        let derived = default_bech32_config(&chain.bech32_config.bech32_prefix_acc_addr);
        assert_eq!(chain.bech32_config, derived);
    }
}

#[assay]
fn descriptors_carry_the_embedded_constants() {
    let registry = ChainRegistry::build(Environment::Production).unwrap();
    let astra = registry.get(constants::ASTRA_CHAIN_ID).unwrap();

    assert_eq!(astra.rpc, constants::ASTRA_RPC_ENDPOINT);
    assert_eq!(astra.rest, constants::ASTRA_REST_ENDPOINT);
    assert_eq!(astra.rpc_config.timeout_ms, 10_000);
    assert_eq!(astra.bip44.coin_type, constants::ASTRA_COIN_TYPE);
    assert_eq!(astra.stake_currency.coin_minimal_denom, "aastra");
    assert_eq!(astra.stake_currency.coin_decimals, 18);
    assert!(astra.has_feature("ibc-transfer"));
    assert!(astra.has_feature("ibc-go"));
    assert!(astra.find_currency("aastra").is_some());
}

#[assay]
fn wire_format_uses_camel_case() {
    let registry = ChainRegistry::build(Environment::Production).unwrap();
    let json = serde_json::to_string(registry.get(constants::ASTRA_CHAIN_ID).unwrap()).unwrap();

    assert!(json.contains("\"chainId\":\"astra_11110-1\""));
    assert!(json.contains("\"bech32Config\""));
    assert!(json.contains("\"bech32PrefixValAddr\":\"astravaloper\""));
    assert!(json.contains("\"walletUrlForStaking\""));
    assert!(json.contains("\"coinType\":60"));
}
