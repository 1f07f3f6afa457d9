// src/core/markup.rs
// Removes `<...>` spans from an extracted field.
// Naive on purpose: no quoting, no entities, no nesting model.

/// Strip every `<...>` span from `text`.
///
/// A `<` at offset 0 takes two bites in one pass: first `[0, first '>']`,
/// then `[0, next '>']` of what is left. So `"<i>quickly</i> vite"` loses
/// `quickly` along with both tags, leaving `" vite"`.
///
/// A `<` with no `>` after it ends the loop and is left in place.
pub fn strip_markup(text: &str) -> String {
    let mut out = s!(text);

    while let Some(lt) = out.find('<') {
        let Some(gt) = out[lt..].find('>').map(|i| i + lt) else {
            logd!("markup: unterminated '<' at {lt}, stopping");
            break;
        };

        if lt == 0 {
            out.replace_range(..=gt, "");
            if let Some(gt2) = out.find('>') {
                out.replace_range(..=gt2, "");
            }
            continue;
        }

        out.replace_range(lt..=gt, "");
    }
    out
}
