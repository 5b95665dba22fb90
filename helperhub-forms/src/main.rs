mod markup;
mod paths;

use std::fs::{self, File};
use std::process::ExitCode;

use formcheck::binding::{dispatch_processed, feedback_element};
use formcheck::{ConfigError, EventResult, FieldState, FormKind, ValidatorOptions};
use formdom::{Document, Event};
use simplelog::{Config, LevelFilter, WriteLogger};
use thiserror::Error;

const USAGE: &str = "usage: helperhub-forms <login|registration|service-request> [field=value ...]";

#[derive(Debug, Error)]
enum AppError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("form '{form}' has no field '{field}'")]
    UnknownField { form: FormKind, field: String },
}

/// A parsed command line.
#[derive(Debug, PartialEq, Eq)]
struct Invocation {
    kind: FormKind,
    values: Vec<(String, String)>,
}

impl Invocation {
    fn parse(args: &[String]) -> Result<Self, AppError> {
        let (kind, rest) = args
            .split_first()
            .ok_or_else(|| AppError::Usage("missing form name".into()))?;
        let kind: FormKind = kind.parse()?;

        let values = rest
            .iter()
            .map(|arg| {
                arg.split_once('=')
                    .map(|(name, value)| (name.to_string(), value.to_string()))
                    .ok_or_else(|| AppError::Usage(format!("expected field=value, got '{arg}'")))
            })
            .collect::<Result<_, _>>()?;

        Ok(Self { kind, values })
    }
}

/// Outcome of filling in and submitting a form.
struct Report {
    fields: Vec<(String, FieldState, Option<String>)>,
    submit: EventResult,
}

/// Type every value into its field the way a user would, leave the last
/// field, then submit the form.
fn fill_and_submit(invocation: &Invocation, options: ValidatorOptions) -> Result<Report, AppError> {
    let kind = invocation.kind;
    let mut doc = markup::document(kind);
    let router = kind.validator(options).bind(&doc);

    for (name, value) in &invocation.values {
        let (id, typed) = doc
            .field(name)
            .map(|el| (el.id.clone(), el.captures_input))
            .ok_or_else(|| AppError::UnknownField {
                form: kind,
                field: name.clone(),
            })?;

        let events = if typed {
            doc.set_value(&id, "");
            doc.type_text(&id, value)
        } else {
            // Choices are picked, not typed: one change for the whole value.
            let mut events = doc.focus(&id);
            doc.set_value(&id, value.as_str());
            events.push(Event::Input {
                target: id.clone(),
                value: value.clone(),
            });
            events
        };
        dispatch_processed(&mut doc, &router, &events);
    }

    let events = doc.blur();
    dispatch_processed(&mut doc, &router, &events);

    let submit = match doc.submit(&markup::form_id(kind)) {
        Some(event) => dispatch_processed(&mut doc, &router, &[event]),
        None => EventResult::Continue,
    };
    log::info!("{kind} form submission: {submit:?}");

    Ok(Report {
        fields: field_states(&doc),
        submit,
    })
}

fn field_states(doc: &Document) -> Vec<(String, FieldState, Option<String>)> {
    doc.field_names()
        .into_iter()
        .map(|name| {
            let state = match doc.field(&name) {
                Some(el) if el.has_class(FieldState::INVALID_CLASS) => FieldState::Invalid,
                Some(el) if el.has_class(FieldState::VALID_CLASS) => FieldState::Valid,
                _ => FieldState::Neutral,
            };
            let error = feedback_element(doc, &name)
                .and_then(|el| el.text_content())
                .map(str::to_string);
            (name, state, error)
        })
        .collect()
}

fn print_report(report: &Report) {
    let width = report
        .fields
        .iter()
        .map(|(name, ..)| name.len())
        .max()
        .unwrap_or(0);

    for (name, state, error) in &report.fields {
        let state = match state {
            FieldState::Neutral => "-",
            FieldState::Valid => "ok",
            FieldState::Invalid => "invalid",
        };
        match error {
            Some(message) => println!("{name:<width$}  {state:<7}  {message}"),
            None => println!("{name:<width$}  {state}"),
        }
    }

    if report.submit.is_prevented() {
        println!("submission prevented");
    } else {
        println!("submission sent");
    }
}

/// Load options from the config directory, falling back to defaults when
/// no options file exists.
fn load_options() -> Result<ValidatorOptions, ConfigError> {
    match paths::options_file() {
        Some(path) if path.exists() => {
            log::info!("loading validator options from {}", path.display());
            ValidatorOptions::load(path)
        }
        _ => Ok(ValidatorOptions::default()),
    }
}

fn init_logging() {
    if let Err(e) = paths::rotate_logs() {
        eprintln!("warning: cannot rotate logs: {e}");
    }
    let Some(path) = paths::log_file() else {
        return;
    };
    if let Some(dir) = path.parent()
        && let Err(e) = fs::create_dir_all(dir)
    {
        eprintln!("warning: cannot create {}: {e}", dir.display());
        return;
    }

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("warning: cannot create log file {}: {e}", path.display());
            return;
        }
    };
    if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), file) {
        eprintln!("warning: cannot initialize logging: {e}");
    }
}

fn run(args: &[String]) -> Result<EventResult, AppError> {
    let invocation = Invocation::parse(args)?;
    let options = load_options()?;
    let report = fill_and_submit(&invocation, options)?;
    print_report(&report);
    Ok(report.submit)
}

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(EventResult::Continue) => ExitCode::SUCCESS,
        Ok(EventResult::PreventDefault) => ExitCode::from(1),
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            if matches!(
                e,
                AppError::Usage(_) | AppError::Config(ConfigError::UnknownForm(_))
            ) {
                eprintln!("{USAGE}");
            }
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn submit(list: &[&str]) -> Result<Report, AppError> {
        let invocation = Invocation::parse(&args(list))?;
        fill_and_submit(&invocation, ValidatorOptions::default())
    }

    #[test]
    fn test_parse_invocation() {
        let argv = args(&["login", "email=user@example.com", "password=a=b"]);
        let invocation = Invocation::parse(&argv).unwrap();
        assert_eq!(invocation.kind, FormKind::Login);
        assert_eq!(
            invocation.values,
            vec![
                ("email".to_string(), "user@example.com".to_string()),
                ("password".to_string(), "a=b".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Invocation::parse(&[]), Err(AppError::Usage(_))));
        assert!(matches!(
            Invocation::parse(&args(&["signup"])),
            Err(AppError::Config(ConfigError::UnknownForm(_)))
        ));
        assert!(matches!(
            Invocation::parse(&args(&["login", "email"])),
            Err(AppError::Usage(_))
        ));
    }

    #[test]
    fn test_invalid_submission_is_prevented() {
        let report = submit(&["login", "email=not-an-email"]).unwrap();

        assert!(report.submit.is_prevented());
        assert_eq!(
            report.fields,
            vec![
                (
                    "email".to_string(),
                    FieldState::Invalid,
                    Some("Please enter a valid email address".to_string())
                ),
                (
                    "password".to_string(),
                    FieldState::Invalid,
                    Some("Password is required".to_string())
                ),
            ]
        );
    }

    #[test]
    fn test_valid_submission_is_sent() {
        let report = submit(&[
            "registration",
            "name=Ada Lovelace",
            "email=ada@example.com",
            "password=abc12345",
            "confirm_password=abc12345",
        ])
        .unwrap();

        assert_eq!(report.submit, EventResult::Continue);
        for (name, state, error) in &report.fields {
            assert_eq!(*state, FieldState::Valid, "{name}");
            assert_eq!(*error, None, "{name}");
        }
    }

    #[test]
    fn test_choice_fields_are_set_directly() {
        let argv = ["service-request", "category=plumbing", "title=Leaky tap"];
        let report = submit(&argv).unwrap();

        assert!(report.submit.is_prevented());
        let (name, state, error) = &report.fields[0];
        assert_eq!(name, "category");
        assert_eq!(*state, FieldState::Neutral);
        assert_eq!(*error, None);
        assert_eq!(report.fields[1].1, FieldState::Valid);
    }

    #[test]
    fn test_unknown_field_is_an_error() {
        assert!(matches!(
            submit(&["login", "phone=123"]),
            Err(AppError::UnknownField { .. })
        ));
    }
}
