use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use serde::Serialize;
use tracing::{debug, info, warn};

use solwire::{
    Hash, Instruction, Keypair, Message, MessageHeader, PROGRAM_IDS, PublicKey, Signature,
    Signer, StakeAccount, Transaction, VoteAccount, builder, system,
};

use crate::config::{PACKET_DATA_SIZE, TextEncoding};

/// Where the raw bytes come from: encoded text on the command line, or a
/// binary file.
#[derive(Args, Debug)]
pub struct InputArgs {
    /// Encoded bytes
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub input: Option<String>,

    /// Raw binary file
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = TextEncoding::Base64)]
    pub encoding: TextEncoding,
}

impl InputArgs {
    pub fn read(&self) -> Result<Vec<u8>> {
        match (&self.input, &self.file) {
            (Some(text), _) => self.encoding.decode(text),
            (None, Some(path)) => {
                std::fs::read(path).with_context(|| format!("reading {}", path.display()))
            }
            (None, None) => bail!("either --input or --file is required"),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KeyView {
    pubkey: PublicKey,
    signer: bool,
    writable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    program: Option<&'static str>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MessageView {
    header: MessageHeader,
    account_keys: Vec<KeyView>,
    recent_blockhash: Hash,
    uses_durable_nonce: bool,
    instructions: Vec<Instruction>,
}

impl MessageView {
    fn new(message: &Message) -> Result<Self> {
        let account_keys = message
            .account_keys
            .iter()
            .enumerate()
            .map(|(i, key)| KeyView {
                pubkey: *key,
                signer: message.is_signer(i),
                writable: message.is_writable(i),
                program: PROGRAM_IDS.name_of(key),
            })
            .collect();
        Ok(Self {
            header: message.header,
            account_keys,
            recent_blockhash: message.recent_blockhash,
            uses_durable_nonce: message.uses_durable_nonce(&PROGRAM_IDS),
            instructions: message.decompile_instructions()?,
        })
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TransactionView {
    signatures: Vec<Signature>,
    fully_signed: bool,
    verified: bool,
    size: usize,
    message: MessageView,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn decode_tx(input: &InputArgs) -> Result<()> {
    let bytes = input.read()?;
    debug!("decoding {} transaction bytes", bytes.len());
    let tx = Transaction::deserialize(&bytes).context("decoding transaction")?;

    let verified = match tx.verify() {
        Ok(()) => true,
        Err(e) => {
            warn!("{e}");
            false
        }
    };
    if bytes.len() > PACKET_DATA_SIZE {
        warn!(
            "transaction is {} bytes, above the {PACKET_DATA_SIZE} byte packet limit",
            bytes.len()
        );
    }

    print_json(&TransactionView {
        signatures: tx.signatures.clone(),
        fully_signed: tx.is_fully_signed(),
        verified,
        size: bytes.len(),
        message: MessageView::new(&tx.message)?,
    })
}

pub fn decode_message(input: &InputArgs) -> Result<()> {
    let bytes = input.read()?;
    let message = Message::deserialize(&bytes).context("decoding message")?;
    print_json(&MessageView::new(&message)?)
}

pub fn stake(input: &InputArgs) -> Result<()> {
    let bytes = input.read()?;
    let account = StakeAccount::decode(&bytes).context("decoding stake account")?;
    debug!(state = ?account.state, delegated = account.is_delegated());
    print_json(&account)
}

pub fn vote(input: &InputArgs) -> Result<()> {
    let bytes = input.read()?;
    let account = VoteAccount::decode(&bytes).context("decoding vote account")?;
    debug!(version = ?account.version, votes = account.votes.len());
    print_json(&account)
}

pub fn transfer(
    keypair: &str,
    to: &str,
    lamports: u64,
    blockhash: &str,
    output: TextEncoding,
) -> Result<()> {
    let payer = Keypair::from_base58(keypair).context("parsing --keypair")?;
    let to: PublicKey = to.parse().context("parsing --to")?;
    let blockhash: Hash = blockhash.parse().context("parsing --blockhash")?;

    let from = payer.pubkey();
    let ix = system::transfer(&from, &to, lamports);
    let tx = builder::build(&[ix], &from, blockhash, &[&payer])?;
    let bytes = tx.serialize()?;

    if let Some(sig) = tx.signature() {
        info!("✍️  {from} -> {to}: {lamports} lamports, signature {sig}");
    }
    println!("{}", output.encode(&bytes));
    Ok(())
}
