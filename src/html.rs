//! HTML writer for type documentation pages.
//!
//! Rendering is plain string assembly: every fragment is final markup when
//! produced, so pages stay deterministic and diff-friendly. All model text
//! is escaped here and nowhere else.

use crate::content::Content;
use crate::model::{MemberDecl, TypeDecl, TypeKind};
use crate::writer::{EnumConstantWriter, PageWriter};

/// Writer producing static HTML fragments.
#[derive(Debug, Default)]
pub struct HtmlWriter;

impl HtmlWriter {
    pub fn new() -> Self {
        Self
    }
}

fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

fn type_kind_label(kind: TypeKind) -> &'static str {
    match kind {
        TypeKind::Enum => "Enum",
        TypeKind::Class => "Class",
    }
}

impl PageWriter for HtmlWriter {
    fn page_header(&self, type_decl: &TypeDecl) -> Content {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
        out.push_str(&format!(
            "<title>{} {}</title>\n",
            type_kind_label(type_decl.kind),
            escape_text(&type_decl.name)
        ));
        out.push_str("</head>\n<body>\n");
        Content::raw(out)
    }

    fn type_heading(&self, type_decl: &TypeDecl) -> Content {
        Content::raw(format!(
            "<h1>{} {}</h1>\n",
            type_kind_label(type_decl.kind),
            escape_text(&type_decl.name)
        ))
    }

    fn add_type_comments(&self, type_decl: &TypeDecl, target: &mut Content) {
        let Some(doc) = type_decl.doc.as_ref() else {
            return;
        };
        target.push_raw(&format!(
            "<div class=\"type-doc\"><p>{}</p>",
            escape_text(&doc.summary)
        ));
        for paragraph in &doc.body {
            target.push_raw(&format!("<p>{}</p>", escape_text(paragraph)));
        }
        target.push_raw("</div>\n");
    }

    fn page_footer(&self) -> Content {
        Content::raw("</body>\n</html>\n")
    }
}

impl EnumConstantWriter for HtmlWriter {
    fn details_header(&self, type_decl: &TypeDecl) -> Content {
        Content::raw(format!(
            "<h2 id=\"enum-constants\">Enum Constants of {}</h2>\n",
            escape_text(&type_decl.name)
        ))
    }

    fn member_list(&self) -> Content {
        Content::new()
    }

    fn member_header(&self, constant: &MemberDecl) -> Content {
        Content::raw(format!(
            "<h3 id=\"constant-{}\">{}</h3>\n",
            escape_text(&constant.name),
            escape_text(&constant.name)
        ))
    }

    fn signature(&self, constant: &MemberDecl) -> Content {
        Content::raw(format!(
            "<pre class=\"signature\">public static final {}</pre>\n",
            escape_text(&constant.name)
        ))
    }

    fn add_deprecated(&self, constant: &MemberDecl, target: &mut Content) {
        let Some(deprecation) = constant.deprecated.as_ref() else {
            return;
        };
        target.push_raw("<div class=\"deprecated\"><strong>Deprecated");
        if let Some(since) = deprecation.since.as_deref() {
            target.push_raw(&format!(" since {}", escape_text(since)));
        }
        target.push_raw(".</strong>");
        if let Some(note) = deprecation.note.as_deref() {
            target.push_raw(&format!(" {}", escape_text(note)));
        }
        target.push_raw("</div>\n");
    }

    fn add_preview(&self, constant: &MemberDecl, target: &mut Content) {
        if !constant.preview {
            return;
        }
        target.push_raw(&format!(
            "<div class=\"preview\"><strong>{} is a preview feature and may change.</strong></div>\n",
            escape_text(&constant.name)
        ));
    }

    fn add_comments(&self, constant: &MemberDecl, target: &mut Content) {
        let Some(doc) = constant.doc.as_ref() else {
            return;
        };
        target.push_raw(&format!(
            "<div class=\"member-doc\"><p>{}</p>",
            escape_text(&doc.summary)
        ));
        for paragraph in &doc.body {
            target.push_raw(&format!("<p>{}</p>", escape_text(paragraph)));
        }
        target.push_raw("</div>\n");
    }

    fn add_tags(&self, constant: &MemberDecl, target: &mut Content) {
        if constant.tags.is_empty() {
            return;
        }
        target.push_raw("<dl class=\"tags\">\n");
        for tag in &constant.tags {
            target.push_raw(&format!(
                "<dt>{}</dt><dd>{}</dd>\n",
                escape_text(&tag.name),
                escape_text(&tag.text)
            ));
        }
        target.push_raw("</dl>\n");
    }

    fn member_list_item(&self, entry: Content) -> Content {
        Content::raw(format!("<li>\n{}</li>\n", entry.as_str()))
    }

    fn details(&self, header: Content, list: Content) -> Content {
        let mut out = Content::raw("<section class=\"enum-constant-details\">\n");
        out.add(header);
        out.push_raw("<ul class=\"member-list\">\n");
        out.add(list);
        out.push_raw("</ul>\n</section>\n");
        out
    }
}
