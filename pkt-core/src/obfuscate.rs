/// Keyless XOR obfuscation layers sandwiching the real cipher

/// Mask for the outer layer: (len - i*len) truncated to 8 bits.
/// The wrap for buffers longer than 255 bytes is intentional; both
/// directions must compute it identically or decoding breaks.
#[inline]
fn outer_mask(i: usize, len: usize) -> u8 {
    (len as u8).wrapping_sub((i as u8).wrapping_mul(len as u8))
}

/// Outer obfuscation, applied as the last encode stage.
/// Writes the buffer back-to-front, XORing each byte with `outer_mask`:
/// out[len-1-i] = in[i] ^ (len - i*len)
pub fn obfuscate_outer(input: &[u8]) -> Vec<u8> {
    let l = input.len();
    let mut output = vec![0u8; l];

    for (i, &b) in input.iter().enumerate() {
        output[l - 1 - i] = b ^ outer_mask(i, l);
    }

    output
}

/// Exact structural inverse of [`obfuscate_outer`], applied as the first
/// decode stage: out[i] = in[len-1-i] ^ (len - i*len)
pub fn deobfuscate_outer(input: &[u8]) -> Vec<u8> {
    let l = input.len();
    let mut output = vec![0u8; l];

    for (i, out) in output.iter_mut().enumerate() {
        *out = input[l - 1 - i] ^ outer_mask(i, l);
    }

    output
}

/// Inner obfuscation, applied between compression and the cipher:
/// out[i] = in[i] ^ (len - i), truncated to 8 bits.
/// Runs once in each pipeline direction; the two applications cancel.
pub fn obfuscate_inner(input: &[u8]) -> Vec<u8> {
    let l = input.len();

    input
        .iter()
        .enumerate()
        .map(|(i, &b)| b ^ (l as u8).wrapping_sub(i as u8))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_known_vector() {
        // len=3: masks are 3, 0, 253
        let input = [0x10, 0x20, 0x30];
        let out = obfuscate_outer(&input);
        assert_eq!(out, vec![0xcd, 0x20, 0x13]);
        assert_eq!(deobfuscate_outer(&out), input);
    }

    #[test]
    fn test_inner_known_vector() {
        // len=3: masks are 3, 2, 1
        let input = [0x10, 0x20, 0x30];
        assert_eq!(obfuscate_inner(&input), vec![0x13, 0x22, 0x31]);
    }

    #[test]
    fn test_outer_roundtrip_small_lengths() {
        for len in 0..=32usize {
            let buf: Vec<u8> = (0..len).map(|i| (i * 7 + 13) as u8).collect();
            assert_eq!(deobfuscate_outer(&obfuscate_outer(&buf)), buf, "len={}", len);
            assert_eq!(obfuscate_outer(&deobfuscate_outer(&buf)), buf, "len={}", len);
        }
    }

    #[test]
    fn test_outer_roundtrip_wrapping_lengths() {
        // Lengths past 255 exercise the 8-bit wrap of i*len
        for len in [256usize, 300, 1000, 4096] {
            let buf: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
            assert_eq!(deobfuscate_outer(&obfuscate_outer(&buf)), buf, "len={}", len);
        }
    }

    #[test]
    fn test_inner_cancels() {
        for len in [0usize, 1, 2, 17, 255, 256, 1000] {
            let buf: Vec<u8> = (0..len).map(|i| (i * 31) as u8).collect();
            assert_eq!(obfuscate_inner(&obfuscate_inner(&buf)), buf, "len={}", len);
        }
    }

    #[test]
    fn test_empty_passthrough() {
        assert!(obfuscate_outer(&[]).is_empty());
        assert!(deobfuscate_outer(&[]).is_empty());
        assert!(obfuscate_inner(&[]).is_empty());
    }
}
