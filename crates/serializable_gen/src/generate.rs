//! # Field-List Compiler
//! Record header -> options -> zipper -> ceiling check -> declarator + binder.
//! All or nothing: any error means no tokens are produced.

use crate::{
    bind::generate_impl,
    declare::generate_struct,
    errors::{singlelist, ErrorKind, GenError, GenErrors},
    fields::FieldList,
    namer::CodeNamer,
    options::{parse_options, Options},
    record::Record,
    tokens::Checked,
    zipper::zip_fields,
};
use prettyplease::unparse;
use proc_macro2::TokenStream;
use quote::{quote, ToTokens};
use std::{fs::File, io::Write, path::Path};
use syn::{parse2, File as SynFile, ItemImpl, ItemStruct, LitStr};

pub struct Generated {
    pub record: Checked<ItemStruct>,
    pub serialize: Checked<ItemImpl>,
}

impl ToTokens for Generated {
    fn to_tokens(&self, tokens: &mut TokenStream) {
        let Self { record, serialize } = self;
        tokens.extend(quote! {
            #record
            #serialize
        })
    }
}

impl Generated {
    /// The expansion as formatted source text.
    pub fn render(&self) -> Result<String, GenError> {
        render(self.to_token_stream())
    }
}

pub fn generate(record: &Record, fields: &FieldList, options: &Options) -> Generated {
    let namer = CodeNamer::new(options.krate.clone());
    Generated {
        record: generate_struct(record, fields, options.pub_fields),
        serialize: generate_impl(record, fields, &namer),
    }
}

/// Parse a whole invocation and generate its code.
pub fn compile(input: TokenStream) -> Result<Generated, GenErrors> {
    let record = parse2::<Record>(input).map_err(|e| singlelist(GenError::from(e)))?;
    let options = parse_options(&record.options)?;
    let fields = zip_fields(record.fields.clone(), record.fields_span)?;
    options.limit.check(&fields).map_err(singlelist)?;
    let generated = generate(&record, &fields, &options);
    if let Some(debug_path) = &options.debug_file {
        debug_output(debug_path, &generated).map_err(singlelist)?;
    }
    Ok(generated)
}

fn render(tks: TokenStream) -> Result<String, GenError> {
    parse2::<SynFile>(tks).map(|file| unparse(&file)).map_err(|e| {
        GenError::new(
            e.span(),
            ErrorKind::DebugOutput(format!("Could not parse code as file: {e}")),
        )
    })
}

fn debug_output(debug_path: &LitStr, generated: &Generated) -> Result<(), GenError> {
    let text = generated
        .render()
        .map_err(|e| GenError::new(debug_path.span(), e.kind))?;
    let fail = |msg: String| GenError::new(debug_path.span(), ErrorKind::DebugOutput(msg));
    let mut file = File::create(Path::new(&debug_path.value()))
        .map_err(|e| fail(format!("Could not create file: {e}")))?;
    file.write_all(text.as_bytes())
        .map_err(|e| fail(format!("Could not write to file: {e}")))
}
