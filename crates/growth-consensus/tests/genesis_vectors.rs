use growth_consensus::constants::COIN;
use growth_consensus::script::pay_to_pubkey_script;
use growth_consensus::{
    build_genesis_block, hash256_from_hex, hash256_to_hex, verified_chain_params, verify_genesis,
    Block, Network,
};

const BITCOIN_MESSAGE: &str =
    "The Times 03/Jan/2009 Chancellor on brink of second bailout for banks";
const BITCOIN_PUBKEY: &str = "04678afdb0fe5548271967f1a67130b7105cd6a828e03909a67962e0ea1f61deb649f6bc3f4cef38c4f35504e51ec112de5c384df7ba0b8d578a4c702b6bf11d5f";

fn bitcoin_genesis() -> Block {
    let pubkey = hex::decode(BITCOIN_PUBKEY).expect("pubkey hex");
    build_genesis_block(
        BITCOIN_MESSAGE.as_bytes(),
        &pay_to_pubkey_script(&pubkey),
        1_231_006_505,
        2_083_236_893,
        0x1d00_ffff,
        1,
        50 * COIN,
    )
}

#[test]
fn reproduces_bitcoin_genesis() {
    let block = bitcoin_genesis();
    assert_eq!(
        hash256_to_hex(&block.header.merkle_root),
        "4a5e1e4baab89f3a32518a88c31bc87f618f76673e2cc77ab2127b7afdeda33b"
    );
    assert_eq!(
        hash256_to_hex(&block.hash()),
        "000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f"
    );

    let hash = hash256_from_hex("000000000019d6689c085ae165831e934ff763ae46a2a6c172b3f1b60a8ce26f")
        .expect("hex");
    verify_genesis(&block, &hash, &block.header.merkle_root).expect("verifies");
}

#[test]
fn serialized_genesis_decodes_back() {
    let block = bitcoin_genesis();
    let bytes = block.consensus_encode();
    // Header, one-byte tx count, then the 204-byte coinbase.
    assert_eq!(bytes.len(), 80 + 1 + 204);
    let decoded = Block::consensus_decode(&bytes).expect("decode");
    assert_eq!(decoded, block);
}

#[test]
fn network_genesis_blocks_encode_identically_apart_from_header() {
    let blocks: Vec<Block> = [Network::Main, Network::Test, Network::Regtest]
        .into_iter()
        .map(|n| verified_chain_params(n).expect("params").genesis)
        .collect();
    for pair in blocks.windows(2) {
        assert_eq!(pair[0].transactions, pair[1].transactions);
        assert_ne!(pair[0].hash(), pair[1].hash());
        assert_eq!(
            pair[0].consensus_encode()[80..],
            pair[1].consensus_encode()[80..]
        );
    }
}
