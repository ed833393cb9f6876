//! Legacy web token (`tk` parameter) generation
//!
//! Reproduces the token scheme of the Google Translate web client, required
//! by the host-relative flavors when token authentication is enabled. The
//! magic constants and the opcode grammar of the transformation spec are
//! observed upstream behavior — exact 32-bit wraparound and logical-shift
//! semantics are an interoperability requirement, so every arithmetic step
//! stays in `u32` with wrapping operators (the JS `>>>`/`<<`/`|0` model).

/// First token key: accumulator seed, and the XOR applied to the checksum
/// suffix of the output.
const TOKEN_SEED: u32 = 406_398;

/// Second token key: XOR'd into the accumulator after the byte loop.
const TOKEN_XOR_KEY: u32 = 2_087_938_574;

/// Generate the `tk` token for `text`.
///
/// Deterministic and pure. The output has the form `"<n>.<n ^ 406398>"`
/// with `n < 1_000_000`.
///
/// The byte expansion iterates UTF-16 *code units* (not scalars): the web
/// client runs on JS strings, and a surrogate pair must be recombined into
/// one supplementary scalar before emission or the checksum diverges for
/// any input outside the BMP.
#[must_use]
pub fn generate_token(text: &str) -> String {
    let units: Vec<u16> = text.encode_utf16().collect();
    let mut encoded: Vec<u32> = Vec::with_capacity(units.len());

    let mut i = 0;
    while i < units.len() {
        let mut c = u32::from(units[i]);
        if c < 128 {
            encoded.push(c);
        } else if c < 2048 {
            encoded.push((c >> 6) | 192);
            encoded.push((c & 63) | 128);
        } else {
            if (c & 0xFC00) == 0xD800
                && i + 1 < units.len()
                && (u32::from(units[i + 1]) & 0xFC00) == 0xDC00
            {
                c = 0x10000 + ((c & 0x3FF) << 10) + (u32::from(units[i + 1]) & 0x3FF);
                i += 1;
                encoded.push((c >> 18) | 240);
                encoded.push(((c >> 12) & 63) | 128);
            } else {
                encoded.push((c >> 12) | 224);
            }
            encoded.push(((c >> 6) & 63) | 128);
            encoded.push((c & 63) | 128);
        }
        i += 1;
    }

    let mut token = TOKEN_SEED;
    for byte in encoded {
        token = token.wrapping_add(byte);
        token = apply_transformation(token, "+-a^+6");
    }
    token = apply_transformation(token, "+-3^+b+-f");
    token ^= TOKEN_XOR_KEY;
    // The upstream script remaps negative 32-bit values into the unsigned
    // range here; under u32 arithmetic that remap is the identity.
    token %= 1_000_000;

    format!("{token}.{}", token ^ TOKEN_SEED)
}

/// Apply a transformation spec to `value`.
///
/// The spec is parsed in opcode triples `(op, dir, digit)`: `digit` is a
/// base-36 shift amount; `dir` `'+'` means logical right shift, anything
/// else left shift; `op` `'+'` means wrapping add, anything else XOR.
fn apply_transformation(mut value: u32, transformation: &str) -> u32 {
    let ops = transformation.as_bytes();
    let mut i = 0;
    while i + 2 < ops.len() {
        let digit = ops[i + 2];
        let amount = if digit >= b'a' {
            u32::from(digit) - 87
        } else {
            u32::from(digit - b'0')
        };
        // wrapping_shr/shl mask the shift amount to 5 bits, matching the
        // JS shift operators the scheme was lifted from.
        let operand = if ops[i + 1] == b'+' {
            value.wrapping_shr(amount)
        } else {
            value.wrapping_shl(amount)
        };
        value = if ops[i] == b'+' {
            value.wrapping_add(operand)
        } else {
            value ^ operand
        };
        i += 3;
    }
    value
}
