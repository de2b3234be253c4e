use crate::pubkey::PublicKey;

/// Native program and sysvar addresses the codec and builder refer to.
///
/// Built from constant bytes so it can live in a `static` with no runtime
/// initialisation; callers borrow [`PROGRAM_IDS`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramIds {
    pub system: PublicKey,
    pub stake: PublicKey,
    pub stake_config: PublicKey,
    pub vote: PublicKey,
    pub compute_budget: PublicKey,
    pub sysvar_clock: PublicKey,
    pub sysvar_rent: PublicKey,
    pub sysvar_recent_blockhashes: PublicKey,
    pub sysvar_stake_history: PublicKey,
}

pub static PROGRAM_IDS: ProgramIds = ProgramIds {
    // 11111111111111111111111111111111
    system: PublicKey::new([0; 32]),
    // Stake11111111111111111111111111111111111111
    stake: PublicKey::new([
        6, 161, 216, 23, 145, 55, 84, 42, 152, 52, 55, 189, 254, 42, 122, 178, 85, 127, 83, 92,
        138, 120, 114, 43, 104, 164, 157, 192, 0, 0, 0, 0,
    ]),
    // StakeConfig11111111111111111111111111111111
    stake_config: PublicKey::new([
        6, 161, 216, 23, 165, 2, 5, 11, 104, 7, 145, 230, 206, 109, 184, 142, 30, 91, 113, 80,
        246, 31, 198, 121, 10, 78, 180, 209, 0, 0, 0, 0,
    ]),
    // Vote111111111111111111111111111111111111111
    vote: PublicKey::new([
        7, 97, 72, 29, 53, 116, 116, 187, 124, 77, 118, 36, 235, 211, 189, 179, 216, 53, 94, 115,
        209, 16, 67, 252, 13, 163, 83, 128, 0, 0, 0, 0,
    ]),
    // ComputeBudget111111111111111111111111111111
    compute_budget: PublicKey::new([
        3, 6, 70, 111, 229, 33, 23, 50, 255, 236, 173, 186, 114, 195, 155, 231, 188, 140, 229,
        187, 197, 247, 18, 107, 44, 67, 155, 58, 64, 0, 0, 0,
    ]),
    // SysvarC1ock11111111111111111111111111111111
    sysvar_clock: PublicKey::new([
        6, 167, 213, 23, 24, 199, 116, 201, 40, 86, 99, 152, 105, 29, 94, 182, 139, 94, 184, 163,
        155, 75, 109, 92, 115, 85, 91, 33, 0, 0, 0, 0,
    ]),
    // SysvarRent111111111111111111111111111111111
    sysvar_rent: PublicKey::new([
        6, 167, 213, 23, 25, 44, 92, 81, 33, 140, 201, 76, 61, 74, 241, 127, 88, 218, 238, 8, 155,
        161, 253, 68, 227, 219, 217, 138, 0, 0, 0, 0,
    ]),
    // SysvarRecentB1ockHashes11111111111111111111
    sysvar_recent_blockhashes: PublicKey::new([
        6, 167, 213, 23, 25, 44, 86, 142, 224, 138, 132, 95, 115, 210, 151, 136, 207, 3, 92, 49,
        69, 178, 26, 179, 68, 216, 6, 46, 169, 64, 0, 0,
    ]),
    // SysvarStakeHistory1111111111111111111111111
    sysvar_stake_history: PublicKey::new([
        6, 167, 213, 23, 25, 53, 132, 208, 254, 237, 155, 179, 67, 29, 19, 32, 107, 229, 68, 40,
        27, 87, 184, 86, 108, 197, 55, 95, 244, 0, 0, 0,
    ]),
};

impl ProgramIds {
    /// Human readable name for a known program or sysvar.
    pub fn name_of(&self, key: &PublicKey) -> Option<&'static str> {
        let named = [
            (self.system, "system"),
            (self.stake, "stake"),
            (self.stake_config, "stake-config"),
            (self.vote, "vote"),
            (self.compute_budget, "compute-budget"),
            (self.sysvar_clock, "sysvar-clock"),
            (self.sysvar_rent, "sysvar-rent"),
            (self.sysvar_recent_blockhashes, "sysvar-recent-blockhashes"),
            (self.sysvar_stake_history, "sysvar-stake-history"),
        ];
        named.iter().find(|(k, _)| k == key).map(|(_, name)| *name)
    }
}
