/// Locale-aware string comparison used for tab ordering
use std::cmp::Ordering;

/// Compare two strings the way the browser's `localeCompare` does
///
/// In the extension this is the browser's own collator. Native builds use the
/// ICU root collation, which agrees with it on accents, case and punctuation.
/// Strings the collator considers equal fall back to code point order, so the
/// result is total.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collate(a, b).then_with(|| a.cmp(b))
}

#[cfg(target_arch = "wasm32")]
fn collate(a: &str, b: &str) -> Ordering {
    js_sys::JsString::from(a)
        .locale_compare(b, &js_sys::Array::new(), &js_sys::Object::new())
        .cmp(&0)
}

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static COLLATOR: Option<icu_collator::Collator> =
        icu_collator::Collator::try_new(&Default::default(), icu_collator::CollatorOptions::new()).ok();
}

#[cfg(not(target_arch = "wasm32"))]
fn collate(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.cmp(b),
    })
}
