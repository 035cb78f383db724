use growth_consensus::{
    block_hash, block_proof, chain_params, decode_compact, encode_compact, hash256_from_hex,
    hash256_to_hex, merkle_root_txids, mine_genesis_nonce, verified_chain_params, ErrorCode,
    GenesisSpec, Hash256, Network,
};
use num_bigint::BigUint;
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
struct Request {
    op: String,

    #[serde(default)]
    bits: u32,

    #[serde(default)]
    value_hex: String,

    #[serde(default)]
    txids: Vec<String>,

    #[serde(default)]
    header_hex: String,

    #[serde(default)]
    network: String,

    #[serde(default)]
    time: Option<u32>,

    #[serde(default)]
    nonce: Option<u32>,
}

#[derive(Default, Serialize)]
struct Response {
    ok: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    err: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    value_hex: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    negative: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    overflow: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    bits: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    work_hex: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    merkle_root: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    block_hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    block_hex: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    nonce: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    chain: Option<ChainSummary>,
}

#[derive(Serialize)]
struct ChainSummary {
    network: String,
    default_port: u16,
    message_start: String,
    genesis_hash: String,
    pow_limit_bits: u32,
    subsidy_halving_interval: u32,
    rule_change_activation_threshold: u32,
    miner_confirmation_window: u32,
    pow_target_spacing: i64,
    checkpoint_count: usize,
}

fn err_code(code: ErrorCode) -> String {
    code.as_str().to_string()
}

fn parse_network(id: &str) -> Result<Network, String> {
    id.parse::<Network>().map_err(|e| err_code(e.code))
}

fn parse_hashes(hexes: &[String]) -> Result<Vec<Hash256>, String> {
    hexes
        .iter()
        .map(|h| hash256_from_hex(h).map_err(|_| "bad hex".to_string()))
        .collect()
}

fn handle(req: Request) -> Result<Response, String> {
    match req.op.as_str() {
        "compact_decode" => {
            let decoded = decode_compact(req.bits);
            Ok(Response {
                ok: true,
                value_hex: Some(decoded.value.to_str_radix(16)),
                negative: Some(decoded.negative),
                overflow: Some(decoded.overflow),
                ..Default::default()
            })
        }
        "compact_encode" => {
            let hex = req.value_hex.trim_start_matches("0x");
            let value = BigUint::parse_bytes(hex.as_bytes(), 16).ok_or("bad hex")?;
            Ok(Response {
                ok: true,
                bits: Some(encode_compact(&value).map_err(|e| err_code(e.code))?),
                ..Default::default()
            })
        }
        "block_proof" => {
            let work = block_proof(req.bits).map_err(|e| err_code(e.code))?;
            Ok(Response {
                ok: true,
                work_hex: Some(work.to_str_radix(16)),
                ..Default::default()
            })
        }
        "merkle_root" => {
            let txids = parse_hashes(&req.txids)?;
            Ok(Response {
                ok: true,
                merkle_root: Some(hash256_to_hex(&merkle_root_txids(&txids))),
                ..Default::default()
            })
        }
        "block_hash" => {
            let header = hex::decode(&req.header_hex).map_err(|_| "bad hex")?;
            let hash = block_hash(&header).map_err(|e| err_code(e.code))?;
            Ok(Response {
                ok: true,
                block_hash: Some(hash256_to_hex(&hash)),
                ..Default::default()
            })
        }
        "genesis" => {
            let network = parse_network(&req.network)?;
            let params = verified_chain_params(network).map_err(|e| err_code(e.code))?;
            let genesis = &params.genesis;
            Ok(Response {
                ok: true,
                block_hash: Some(hash256_to_hex(&genesis.hash())),
                merkle_root: Some(hash256_to_hex(&genesis.header.merkle_root)),
                block_hex: Some(hex::encode(genesis.consensus_encode())),
                time: Some(genesis.header.time),
                nonce: Some(genesis.header.nonce),
                bits: Some(genesis.header.bits),
                ..Default::default()
            })
        }
        "mine_genesis" => {
            // Starts from the network's genesis header; time and nonce may be overridden.
            let network = parse_network(&req.network)?;
            let params = chain_params(network).map_err(|e| err_code(e.code))?;
            let header = &params.genesis.header;
            let bits = if req.bits != 0 { req.bits } else { header.bits };
            let start = GenesisSpec::standard(
                req.time.unwrap_or(header.time),
                req.nonce.unwrap_or(0),
                bits,
            )
            .build()
            .header;
            let mined = mine_genesis_nonce(&start).map_err(|e| err_code(e.code))?;
            Ok(Response {
                ok: true,
                block_hash: Some(hash256_to_hex(&mined.hash)),
                time: Some(mined.time),
                nonce: Some(mined.nonce),
                bits: Some(bits),
                ..Default::default()
            })
        }
        "chain_params" => {
            let network = parse_network(&req.network)?;
            let params = verified_chain_params(network).map_err(|e| err_code(e.code))?;
            let c = &params.consensus;
            Ok(Response {
                ok: true,
                chain: Some(ChainSummary {
                    network: params.network.to_string(),
                    default_port: params.default_port,
                    message_start: hex::encode(params.message_start),
                    genesis_hash: hash256_to_hex(&c.hash_genesis_block),
                    pow_limit_bits: c.pow_limit_bits(),
                    subsidy_halving_interval: c.subsidy_halving_interval,
                    rule_change_activation_threshold: c.rule_change_activation_threshold,
                    miner_confirmation_window: c.miner_confirmation_window,
                    pow_target_spacing: c.pow_target_spacing,
                    checkpoint_count: params.checkpoints.checkpoints.len(),
                }),
                ..Default::default()
            })
        }
        _ => Err("unknown op".to_string()),
    }
}

fn main() {
    let resp = match serde_json::from_reader::<_, Request>(std::io::stdin()) {
        Ok(req) => handle(req).unwrap_or_else(|err| Response {
            ok: false,
            err: Some(err),
            ..Default::default()
        }),
        Err(e) => Response {
            ok: false,
            err: Some(format!("bad request: {e}")),
            ..Default::default()
        },
    };
    let _ = serde_json::to_writer(std::io::stdout(), &resp);
}
