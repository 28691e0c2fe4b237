//! A wrapper for [TokenStream] that allows for 1-token lookahead, and records
//! the last [Span] consumed (to place errors at the end of input).

use proc_macro2::{token_stream::IntoIter, Delimiter, Span, TokenStream, TokenTree};

pub(crate) struct TokenIter {
    next: Option<TokenTree>,
    iter: IntoIter,
    start_span: Span,
    prev_span: Option<Span>,
}

impl TokenIter {
    pub fn from(ts: TokenStream, start_span: Span) -> Self {
        let mut iter = ts.into_iter();
        Self {
            next: iter.next(),
            iter,
            start_span,
            prev_span: None,
        }
    }

    pub fn next(&mut self) -> Option<TokenTree> {
        let mut tk = self.iter.next();
        std::mem::swap(&mut self.next, &mut tk);
        if let Some(t) = &tk {
            self.prev_span = Some(t.span());
        }
        tk
    }

    pub fn peek_next(&self) -> Option<&TokenTree> {
        self.next.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.next.is_none()
    }

    pub fn peek_punct(&self, punct: char) -> bool {
        matches!(&self.next, Some(TokenTree::Punct(p)) if p.as_char() == punct)
    }

    /// Where to report something missing: after the last token consumed, or
    /// at the start of the input if nothing was.
    pub fn end_span(&self) -> Span {
        self.prev_span.unwrap_or(self.start_span)
    }

    /// Consume tokens up to (not including) the next `punct`, or to the end.
    pub fn collect_until(&mut self, punct: char) -> TokenStream {
        let mut tks = Vec::new();
        while !self.is_empty() && !self.peek_punct(punct) {
            if let Some(tk) = self.next() {
                tks.push(tk);
            }
        }
        TokenStream::from_iter(tks)
    }
}

fn delim_display(delim: Delimiter) -> &'static str {
    match delim {
        Delimiter::Parenthesis => "( .. )",
        Delimiter::Brace => "{ .. }",
        Delimiter::Bracket => "[ .. ]",
        Delimiter::None => "..",
    }
}

pub(crate) fn describe_tokentree(tt: &TokenTree) -> String {
    match tt {
        TokenTree::Ident(i) => i.to_string(),
        TokenTree::Punct(p) => p.to_string(),
        TokenTree::Literal(l) => l.to_string(),
        // invisible groups come from `macro_rules!` fragments (e.g. `$t:ty`)
        TokenTree::Group(g) if g.delimiter() == Delimiter::None => g.stream().to_string(),
        TokenTree::Group(g) => delim_display(g.delimiter()).to_owned(),
    }
}
