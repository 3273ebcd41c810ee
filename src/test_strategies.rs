use proptest::prelude::*;

pub(crate) fn dice_strategy() -> impl Strategy<Value = String> {
    (prop::option::of(0u16..=30), 0u16..=120, prop_oneof![Just("d"), Just("D")])
        .prop_map(|(count, faces, marker)| match count {
            Some(count) => format!("{}{}{}", count, marker, faces),
            None => format!("{}{}", marker, faces),
        })
}

pub(crate) fn number_strategy() -> impl Strategy<Value = String> {
    (0u32..=1000).prop_map(|n| n.to_string())
}

/// Junk a classifier has to reject: stray letters, doubled markers, decimals.
pub(crate) fn garbage_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-ce-z]{1,4}",
        "[0-9]{1,2}d[0-9]{1,2}d[0-9]{1,2}",
        "[0-9]{1,2}d[0-9]{1,2}[!*/xf]",
        "[0-9]{1,2}\\.[0-9]",
    ]
}

pub(crate) fn term_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        4 => dice_strategy(),
        3 => number_strategy(),
        1 => garbage_strategy(),
    ]
}

/// An expression together with how many non-empty terms it was built from.
pub(crate) fn expression_strategy() -> impl Strategy<Value = (String, usize)> {
    (
        prop_oneof![Just(""), Just("+"), Just("-")],
        term_strategy(),
        prop::collection::vec(
            (prop_oneof![Just(" + "), Just(" - "), Just("+"), Just("-"), Just(" - + ")], term_strategy()),
            0..6,
        ),
    )
        .prop_map(|(lead, first, rest)| {
            let terms = 1 + rest.len();
            let mut ret = format!("{}{}", lead, first);
            for (op, term) in rest {
                ret.push_str(op);
                ret.push_str(&term);
            }
            (ret, terms)
        })
}
