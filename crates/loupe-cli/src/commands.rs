//! Command execution.

use std::fs;
use std::io::Write;
use std::sync::Arc;

use loupe_core::{Document, DocumentEditor, EngineConfig};
use loupe_syntax::{
    BuiltinLanguage, FragmentProvider, LanguageRegistry, NodeTypePattern, Parser,
    RegexPatternFinder, StructuralPatternFinder, SyntaxError,
};
use loupe_template::variants::{css_rule_template, json_object_template};
use loupe_template::{SlotSpecification, Template, Value, providers};
use tracing::{debug, info};

use crate::cli::{Command, SetArgs, Source};
use crate::config::Config;
use crate::errors::AppError;
use crate::output::{write_fragments, write_tree};

/// Runs one command, writing its report to `out`.
pub(crate) fn execute(
    command: &Command,
    config: &Config,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let registry = Arc::new(LanguageRegistry::with_builtin_languages());
    match command {
        Command::Languages => {
            for language in registry.languages() {
                writeln!(
                    out,
                    "{}\t{}\t{}",
                    language.id(),
                    language.name(),
                    language.editor_language_id()
                )?;
            }
            Ok(())
        }
        Command::Tree { source } => {
            let document = read_document(source)?;
            let tree = parser_for(&registry, document.language_id())?.parse(document.content());
            write_tree(out, tree.root())
        }
        Command::Grep { pattern, source } => {
            let document = read_document(source)?;
            let finder = RegexPatternFinder::with_config(pattern, config.engine().clone())?;
            write_fragments(out, &finder.apply_in_document(&document))
        }
        Command::Nodes {
            node_type,
            skip_descendants,
            source,
        } => {
            let document = read_document(source)?;
            parser_for(&registry, document.language_id())?;
            let base = NodeTypePattern::new(node_type);
            let pattern = if *skip_descendants {
                base.skipping_descendants()
            } else {
                base
            };
            let finder = StructuralPatternFinder::new(registry, pattern, config.engine().clone());
            write_fragments(out, &finder.provide_fragments_for_document(&document))
        }
        Command::Set(args) => set_slots(args, registry, config.engine().clone(), out),
    }
}

fn read_document(source: &Source) -> Result<Document, AppError> {
    let content = fs::read_to_string(&source.file).map_err(|error| AppError::ReadDocument {
        path: source.file.clone(),
        source: error,
    })?;
    let language_id = source
        .language
        .clone()
        .or_else(|| BuiltinLanguage::from_path(&source.file).map(|found| found.as_str().to_owned()))
        .ok_or_else(|| AppError::UndeterminedLanguage {
            path: source.file.clone(),
        })?;
    debug!(
        path = %source.file.display(),
        language = %language_id,
        bytes = content.len(),
        "read document"
    );
    Ok(Document::new(language_id, content))
}

fn parser_for<'r>(registry: &'r LanguageRegistry, id: &str) -> Result<&'r dyn Parser, AppError> {
    let language = registry
        .get_language_with_id(id)
        .ok_or_else(|| SyntaxError::unknown_language(id))?;
    Ok(language.parser().ok_or_else(|| SyntaxError::no_parser(id))?)
}

/// Splits `key=value`; the value is read as a JSON literal when it is one
/// and as bare text otherwise.
pub(crate) fn parse_assignment(assignment: &str) -> Result<(String, Value), AppError> {
    let (key, raw) = assignment
        .split_once('=')
        .filter(|(key, _)| !key.trim().is_empty())
        .ok_or_else(|| AppError::MalformedAssignment(assignment.to_owned()))?;
    let value = serde_json::from_str::<Value>(raw).unwrap_or_else(|_| Value::Text(raw.to_owned()));
    Ok((key.trim().to_owned(), value))
}

enum Target<'a> {
    JsonObject(&'a str),
    CssRule(&'a str),
}

impl Target<'_> {
    fn declare(
        &self,
        specification: SlotSpecification,
        key: &str,
        value: &Value,
    ) -> SlotSpecification {
        match (self, value) {
            (_, Value::Boolean(_)) => specification.with(key, providers::boolean()),
            (Self::JsonObject(_), Value::Number(_)) => specification.with(key, providers::number()),
            // Inserted CSS lengths default to pixels.
            (Self::CssRule(_), Value::Number(_)) => {
                specification.with_prototype(key, providers::dimension(), "0px")
            }
            (Self::JsonObject(_), Value::Text(_)) => {
                specification.with(key, providers::quoted_string())
            }
            (Self::CssRule(_), Value::Text(_)) => specification.with(key, providers::text()),
        }
    }

    fn template(
        &self,
        registry: Arc<LanguageRegistry>,
        specification: SlotSpecification,
        engine: EngineConfig,
    ) -> Template {
        match self {
            Self::JsonObject(key) => json_object_template(registry, key, specification, engine),
            Self::CssRule(selector) => css_rule_template(registry, selector, specification, engine),
        }
    }
}

fn set_slots(
    args: &SetArgs,
    registry: Arc<LanguageRegistry>,
    engine: EngineConfig,
    out: &mut impl Write,
) -> Result<(), AppError> {
    let target = args.object.as_deref().map_or_else(
        || Target::CssRule(args.selector.as_deref().unwrap_or_default()),
        Target::JsonObject,
    );
    let assignments = args
        .assignments
        .iter()
        .map(String::as_str)
        .map(parse_assignment)
        .collect::<Result<Vec<_>, _>>()?;
    let specification = assignments
        .iter()
        .fold(SlotSpecification::new(), |specification, (key, value)| {
            target.declare(specification, key, value)
        });

    let document = read_document(&args.source)?;
    let mut template = target.template(registry, specification, engine);
    template.recompute(&document);
    if template.is_empty() {
        return Err(AppError::NoFragments {
            path: args.source.file.clone(),
        });
    }

    let indices = args
        .fragment
        .map_or_else(|| (0..template.len()).collect(), |index| vec![index]);
    let mut editor = DocumentEditor::new(document);
    for index in indices {
        for (key, value) in &assignments {
            let edit = if template.slot(index, key).is_some() {
                template.commit(index, key, value)?
            } else {
                template.insert_value(index, key, value)?
            };
            editor.push(edit);
        }
    }
    let edits = editor.pending().len();
    let edited = editor.apply_edits()?;
    info!(
        path = %args.source.file.display(),
        edits,
        version = edited.version(),
        "applied slot edits"
    );

    if args.write {
        fs::write(&args.source.file, edited.content()).map_err(|error| {
            AppError::WriteDocument {
                path: args.source.file.clone(),
                source: error,
            }
        })
    } else {
        out.write_all(edited.content().as_bytes())?;
        Ok(())
    }
}
