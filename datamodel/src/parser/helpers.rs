use super::Pair;

#[track_caller]
pub(super) fn parsing_catch_all(token: &Pair<'_>, kind: &str) -> ! {
    unreachable!(
        "Encountered impossible {kind} declaration during parsing: {:?}",
        token.as_str()
    )
}
