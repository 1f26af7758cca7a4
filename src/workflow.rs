//! Command workflows wiring the model, builders, writer, and output.

use crate::builders::{Context, TypePageBuilder};
use crate::cli::{CheckArgs, GenerateArgs};
use crate::content::Content;
use crate::html::HtmlWriter;
use crate::members::VisibleMemberTable;
use crate::model::{self, MemberKind};
use crate::options::BuildOptions;
use crate::output;
use anyhow::Result;

/// Render one HTML page per type in the model.
pub fn run_generate(args: &GenerateArgs) -> Result<()> {
    let doc_model = model::load_model(&args.model)?;
    let options = BuildOptions {
        no_comments: args.no_comments,
        include_private: args.include_private,
    };
    let writer = HtmlWriter::new();

    let mut pages_written = 0usize;
    let mut members_documented = 0usize;
    for type_decl in &doc_model.types {
        let table = VisibleMemberTable::new(type_decl, &options);
        let context = Context {
            type_decl,
            members: &table,
            options: &options,
        };
        let mut page = Content::new();
        TypePageBuilder::new(context, &writer).build(&mut page);

        let rel_path = output::page_file_name(&type_decl.name);
        let dest = output::write_page(&args.out, &rel_path, page.as_str())?;
        tracing::debug!(page = %dest.display(), members = table.len(), "wrote type page");
        pages_written += 1;
        members_documented += table.len();
    }

    tracing::info!(
        types = doc_model.types.len(),
        pages_written,
        members_documented,
        "generate complete"
    );
    println!("wrote {} page(s) to {}", pages_written, args.out.display());
    Ok(())
}

/// Load and validate a model, reporting what would be documented.
pub fn run_check(args: &CheckArgs) -> Result<()> {
    let doc_model = model::load_model(&args.model)?;
    let options = BuildOptions {
        include_private: args.include_private,
        ..Default::default()
    };

    let mut total_visible = 0usize;
    for type_decl in &doc_model.types {
        let table = VisibleMemberTable::new(type_decl, &options);
        let constants = table.visible_members(MemberKind::EnumConstant).len();
        let fields = table.visible_members(MemberKind::Field).len();
        println!(
            "{}: {} enum constant(s), {} field(s)",
            type_decl.name, constants, fields
        );
        total_visible += table.len();
    }
    println!(
        "{} type(s), {} visible member(s)",
        doc_model.types.len(),
        total_visible
    );
    Ok(())
}
