//! Captured wire vectors shared by the unit tests.
//!
//! Signatures are real ed25519 signatures over the embedded messages, made
//! with the two keypairs below.

pub const ALICE: &str = "EvN4kgKmCmYzdbd5kL8Q8YgkUW5RoqMTpBczrfLExtx7";
pub const BOB: &str = "A4iUVr5KjmsLymUcv4eSKPedUtoaBceiPeGipKMYc69b";

pub const ALICE_KEYPAIR: [u8; 64] = [
    220, 190, 97, 243, 86, 180, 6, 192, 121, 120, 30, 246, 134, 81, 46, 27, 181, 181, 148, 200,
    182, 184, 13, 124, 51, 186, 141, 11, 125, 116, 9, 203, 206, 211, 135, 230, 195, 111, 87, 254,
    147, 239, 143, 81, 110, 159, 49, 140, 109, 137, 224, 197, 24, 49, 223, 61, 123, 8, 78, 109,
    110, 136, 228, 240,
];

pub const BOB_KEYPAIR: [u8; 64] = [
    55, 197, 194, 189, 188, 226, 127, 64, 68, 154, 221, 208, 200, 63, 127, 189, 249, 107, 106, 53,
    74, 225, 149, 73, 111, 6, 153, 152, 62, 77, 118, 242, 134, 172, 209, 213, 227, 137, 61, 108,
    116, 171, 205, 124, 54, 68, 61, 110, 80, 31, 240, 117, 108, 137, 97, 222, 38, 242, 68, 156, 27,
    65, 29, 142,
];

pub const TRANSFER_BLOCKHASH: &str = "FwRYtTPRk5N4wUeP87rTw9kQVSwigB6kbikGzzeCMrW5";
pub const TWO_SIGNER_BLOCKHASH: &str = "9qERNBLXzCqchyfquh2DjUT21xsLym6ynZPRh9TZbEiq";

/// Alice transfers 256 lamports to Bob, Alice pays.
pub const TRANSFER_DATA: [u8; 12] = [2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0];

pub const TRANSFER_SIGNATURE: [u8; 64] = [
    189, 98, 67, 19, 102, 99, 124, 234, 70, 209, 28, 10, 33, 66, 167, 162, 222, 122, 16, 68, 248,
    129, 46, 111, 221, 255, 40, 40, 236, 84, 233, 213, 234, 185, 235, 222, 155, 204, 139, 164, 184,
    155, 32, 54, 151, 73, 235, 65, 200, 76, 127, 111, 244, 72, 183, 208, 21, 247, 114, 176, 181,
    21, 77, 8,
];

pub const TRANSFER_TX: [u8; 215] = [
    1, 189, 98, 67, 19, 102, 99, 124, 234, 70, 209, 28, 10, 33, 66, 167, 162, 222, 122, 16, 68,
    248, 129, 46, 111, 221, 255, 40, 40, 236, 84, 233, 213, 234, 185, 235, 222, 155, 204, 139, 164,
    184, 155, 32, 54, 151, 73, 235, 65, 200, 76, 127, 111, 244, 72, 183, 208, 21, 247, 114, 176,
    181, 21, 77, 8, 1, 0, 1, 3, 206, 211, 135, 230, 195, 111, 87, 254, 147, 239, 143, 81, 110, 159,
    49, 140, 109, 137, 224, 197, 24, 49, 223, 61, 123, 8, 78, 109, 110, 136, 228, 240, 134, 172,
    209, 213, 227, 137, 61, 108, 116, 171, 205, 124, 54, 68, 61, 110, 80, 31, 240, 117, 108, 137,
    97, 222, 38, 242, 68, 156, 27, 65, 29, 142, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 221, 244, 189, 59, 8, 252, 7, 91, 129, 169, 22,
    151, 32, 104, 208, 131, 64, 75, 232, 201, 77, 13, 187, 220, 103, 232, 190, 100, 35, 210, 17,
    42, 1, 2, 2, 0, 1, 12, 2, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0,
];

/// Alice sends 1 lamport to Bob and Bob sends 1 lamport back; both sign,
/// Alice pays.
pub const TWO_SIGNER_DATA: [u8; 12] = [2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0];

pub const TWO_SIGNER_TX: [u8; 296] = [
    2, 74, 231, 188, 191, 144, 39, 14, 161, 169, 155, 174, 83, 136, 177, 49, 105, 154, 137, 23,
    153, 145, 47, 130, 208, 246, 195, 244, 141, 52, 228, 21, 190, 130, 99, 162, 145, 30, 133, 140,
    2, 103, 40, 95, 141, 116, 111, 249, 205, 59, 137, 56, 204, 67, 132, 148, 152, 74, 69, 48, 200,
    227, 0, 156, 8, 33, 150, 49, 151, 221, 70, 119, 149, 120, 244, 227, 186, 179, 109, 146, 176,
    20, 58, 224, 180, 254, 64, 210, 181, 208, 226, 151, 52, 192, 198, 242, 20, 184, 23, 238, 214,
    165, 140, 56, 190, 100, 122, 29, 216, 79, 196, 144, 239, 203, 64, 106, 255, 216, 27, 153, 242,
    78, 154, 235, 204, 72, 58, 227, 3, 2, 0, 1, 3, 206, 211, 135, 230, 195, 111, 87, 254, 147, 239,
    143, 81, 110, 159, 49, 140, 109, 137, 224, 197, 24, 49, 223, 61, 123, 8, 78, 109, 110, 136,
    228, 240, 134, 172, 209, 213, 227, 137, 61, 108, 116, 171, 205, 124, 54, 68, 61, 110, 80, 31,
    240, 117, 108, 137, 97, 222, 38, 242, 68, 156, 27, 65, 29, 142, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 131, 56, 140, 99, 57, 71, 67,
    79, 102, 217, 86, 239, 231, 34, 85, 48, 147, 87, 18, 236, 176, 227, 54, 6, 201, 50, 117, 164,
    3, 220, 147, 222, 2, 2, 2, 0, 1, 12, 2, 0, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 2, 2, 1, 0, 12, 2, 0,
    0, 0, 1, 0, 0, 0, 0, 0, 0, 0,
];

/// Signature count prefix plus one signature.
pub const TRANSFER_MESSAGE_OFFSET: usize = 1 + 64;
pub const TWO_SIGNER_MESSAGE_OFFSET: usize = 1 + 2 * 64;
