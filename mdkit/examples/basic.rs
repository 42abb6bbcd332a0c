use mdkit::{
    bracket::find_closing_bracket,
    regex::edit,
    table::split_cells,
    url::{clean_url, UrlResolver},
};

fn main() {
    // A link: `[text](target)`
    let inline_link = edit(r"^\[(label)\]\((href)\)")
        .replace("label", r"(?:\\.|[^\[\]\\])*")
        .replace("href", r"[^\s()]*")
        .get_regex()
        .unwrap();
    let caps = inline_link.captures("[docs](guide/intro.md)").unwrap();
    assert_eq!(&caps[1], "docs");

    let mut resolver = UrlResolver::new();
    let href = resolver.clean_url(true, Some("https://example.com/docs/index.md"), &caps[2]);
    assert_eq!(href.as_deref(), Some("https://example.com/docs/guide/intro.md"));
    assert_eq!(clean_url("javascript:alert(1)").sanitize(true).call(), None);

    // The tokenizer has consumed the `[`
    let text = r"nested [brackets] and \] escapes](url)";
    assert_eq!(find_closing_bracket(text, ['[', ']']), Some(32));

    assert_eq!(split_cells(r"| a | b \| c |", 4), ["", "a", "b | c", ""]);
}
