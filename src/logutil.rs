//! Log sanitation for remote-supplied text.
//!
//! Outcome strings and session tokens come from the network; anything with
//! embedded newlines or control characters would break single-line log
//! scanning, so they pass through here first.

/// Render a string safe for single-line logging: common control
/// characters become their escape spellings, anything else non-printable
/// becomes `\xNN`, and long strings are cut with an ellipsis.
pub fn sanitize_log(s: &str) -> String {
    const MAX_PREVIEW: usize = 200;
    let mut out = String::with_capacity(s.len().min(MAX_PREVIEW) + 8);
    for (count, ch) in s.chars().enumerate() {
        if count >= MAX_PREVIEW {
            out.push('…');
            break;
        }
        match ch {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => {
                use std::fmt::Write;
                let _ = write!(&mut out, "\\x{:02X}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
