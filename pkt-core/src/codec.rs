/// Four-stage pipeline between XML payloads and the binary .pkt container
use crate::cipher::{eax_decrypt_bytes, eax_encrypt_bytes};
use crate::error::Result;
use crate::frame::{compress_frame, decompress_frame};
use crate::obfuscate::{deobfuscate_outer, obfuscate_inner, obfuscate_outer};

/// Observer for stage-boundary buffers, e.g. a CLI hexdump.
///
/// Called once after each completed stage with a label and that stage's
/// output. Purely observational; the pipeline ignores anything it does.
pub trait StageTrace {
    fn stage(&mut self, label: &str, data: &[u8]);
}

/// [`StageTrace`] that discards everything.
pub struct Silent;

impl StageTrace for Silent {
    fn stage(&mut self, _label: &str, _data: &[u8]) {}
}

/// Encode an XML payload into the binary .pkt container.
pub fn encode(xml: &[u8]) -> Result<Vec<u8>> {
    encode_traced(xml, &mut Silent)
}

/// Like [`encode`], reporting each stage's output to `trace`.
///
/// Stage order: deflate+frame, inner XOR, Twofish-EAX seal, outer XOR.
/// The first failing stage aborts the whole operation; no partial output.
pub fn encode_traced(xml: &[u8], trace: &mut dyn StageTrace) -> Result<Vec<u8>> {
    let framed = compress_frame(xml)?;
    trace.stage("compressed", &framed);

    let masked = obfuscate_inner(&framed);
    trace.stage("obfuscated", &masked);

    let sealed = eax_encrypt_bytes(&masked)?;
    trace.stage("encrypted", &sealed);

    let packed = obfuscate_outer(&sealed);
    trace.stage("scrambled", &packed);

    Ok(packed)
}

/// Decode a binary .pkt container back into its XML payload.
pub fn decode(pkt: &[u8]) -> Result<Vec<u8>> {
    decode_traced(pkt, &mut Silent)
}

/// Like [`decode`], reporting each stage's output to `trace`.
///
/// Exact mirror of [`encode_traced`]: outer XOR, Twofish-EAX open,
/// inner XOR, unframe+inflate.
pub fn decode_traced(pkt: &[u8], trace: &mut dyn StageTrace) -> Result<Vec<u8>> {
    let unscrambled = deobfuscate_outer(pkt);
    trace.stage("unscrambled", &unscrambled);

    let opened = eax_decrypt_bytes(&unscrambled)?;
    trace.stage("decrypted", &opened);

    let unmasked = obfuscate_inner(&opened);
    trace.stage("deobfuscated", &unmasked);

    let xml = decompress_frame(&unmasked)?;
    trace.stage("decompressed", &xml);

    Ok(xml)
}
