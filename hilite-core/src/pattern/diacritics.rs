//! Diacritic equivalence classes
//!
//! Each entry is a base Latin letter followed by its accented variants. The
//! classes are pairwise disjoint, so expanding one never touches another.

/// Ordered diacritic equivalence classes
pub const DIACRITIC_CLASSES: &[&str] = &[
    "aÀÁÂÃÄÅàáâãäåĀāąĄ",
    "cÇçćĆčČ",
    "dđĐďĎ",
    "eÈÉÊËèéêëěĚĒēęĘ",
    "iÌÍÎÏìíîïĪī",
    "lłŁ",
    "nÑñňŇńŃ",
    "oÒÓÔÕÖØòóôõöøŌō",
    "rřŘ",
    "sŠšśŚ",
    "tťŤ",
    "uÙÚÛÜùúûüůŮŪū",
    "yŸÿýÝ",
    "zŽžżŻźŹ",
];

fn is_member(class: &str, ch: char) -> bool {
    class.contains(ch) || ch.to_lowercase().any(|lower| class.contains(lower))
}

/// Index of the class containing `ch`, ignoring case
pub fn class_of(ch: char) -> Option<usize> {
    DIACRITIC_CLASSES
        .iter()
        .position(|class| is_member(class, ch))
}

/// Replace every class member in `pattern` with a bracketed character class
///
/// Classes are expanded in order of first appearance and at most once each.
pub fn expand_diacritics(pattern: &str) -> String {
    let mut expanded = pattern.to_string();
    let mut handled = [false; DIACRITIC_CLASSES.len()];

    for ch in pattern.chars() {
        let Some(index) = class_of(ch) else {
            continue;
        };
        if handled[index] {
            continue;
        }
        handled[index] = true;

        let class = DIACRITIC_CLASSES[index];
        let mut next = String::with_capacity(expanded.len() + class.len() + 2);
        for c in expanded.chars() {
            if is_member(class, c) {
                next.push('[');
                next.push_str(class);
                next.push(']');
            } else {
                next.push(c);
            }
        }
        expanded = next;
    }

    expanded
}
