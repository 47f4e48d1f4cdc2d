use crate::form::events::{FieldId, InputEvent};
use std::ffi::OsString;

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about = "Book an OrthoChat demo", long_about = None)]
struct ClapArgs {
    /// Profile section to read the endpoint from
    #[clap(short = 'p', long, default_value = "default", help = "profile name")]
    profile: String,

    /// Webhook URL, overrides environment and profile
    #[clap(long)]
    endpoint: Option<String>,

    #[clap(long)]
    first_name: Option<String>,

    #[clap(long)]
    last_name: Option<String>,

    #[clap(long)]
    email: Option<String>,

    #[clap(long)]
    practice_name: Option<String>,

    #[clap(long)]
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    profile: String,
    endpoint: Option<String>,
    fields: Vec<(FieldId, String)>,
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        Self::from_clap(ClapArgs::parse())
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::from_clap(ClapArgs::parse_from(itr))
    }

    fn from_clap(args: ClapArgs) -> Self {
        let fields = [
            (FieldId::FirstName, args.first_name),
            (FieldId::LastName, args.last_name),
            (FieldId::Email, args.email),
            (FieldId::PracticeName, args.practice_name),
            (FieldId::Message, args.message),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|v| (field, v)))
        .collect();

        Self {
            profile: args.profile,
            endpoint: args.endpoint,
            fields,
        }
    }

    pub fn profile(&self) -> &String {
        &self.profile
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// Field values given as flags, in form order
    pub fn fields(&self) -> &[(FieldId, String)] {
        &self.fields
    }

    /// True when the lead comes from flags instead of terminal prompts
    pub fn is_scripted(&self) -> bool {
        !self.fields.is_empty()
    }

    /// Input events that fill the flagged fields and press submit
    pub fn scripted_events(&self) -> Vec<InputEvent> {
        self.fields
            .iter()
            .map(|(field, value)| InputEvent::field(*field, value.clone()))
            .chain(std::iter::once(InputEvent::SubmitPressed))
            .collect()
    }
}
