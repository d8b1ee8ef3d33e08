/// Wraps every token in brackets: `["", "a"]` becomes `[][a]`.
pub fn format_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    let len = tokens.iter().map(|t| t.as_ref().len() + 2).sum();
    let mut s = String::with_capacity(len);
    for t in tokens {
        s.push('[');
        s.push_str(t.as_ref());
        s.push(']');
    }
    s
}
