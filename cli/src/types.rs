use ::clap::{Args, Subcommand};

use crate::imports::*;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Format an instant in a stop's time zone and in the local time zone
    Times(TimesOptions),

    /// Print an HTML snippet that embeds the journey planner widget
    Embed(EmbedOptions),
}

#[derive(Args, Debug)]
pub struct HostOptions {
    /// Local IANA time zone [default: detected from TZ or the system]
    #[clap(long, value_name = "TZ", env = "TRANSITOUS_TIME_ZONE")]
    pub time_zone: Option<String>,

    /// Local locale as a BCP 47 tag or POSIX name [default: from LC_ALL, LC_TIME or LANG]
    #[clap(long, value_name = "LOCALE", env = "TRANSITOUS_LOCALE")]
    pub locale: Option<Locale>,
}

#[derive(Args, Debug)]
pub struct TimesOptions {
    /// Instant as RFC 3339, RFC 2822, ISO 8601 or epoch milliseconds [default: now]
    #[clap(value_name = "INSTANT")]
    pub instant: Option<String>,

    /// IANA time zone of the stop [default: local time zone]
    #[clap(short, long, value_name = "TZ")]
    pub stop_time_zone: Option<String>,

    #[clap(flatten)]
    pub host: HostOptions,

    /// Time zone label style (valid values: offset, abbreviation)
    #[clap(long, value_name = "STYLE", default_value = "offset")]
    pub zone_label: ZoneLabel,

    /// Print the result as JSON
    #[clap(short, long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct EmbedOptions {
    /// Start location
    #[clap(short, long, value_name = "LABEL")]
    pub from: Option<String>,

    /// Destination location
    #[clap(short, long, value_name = "LABEL")]
    pub to: Option<String>,

    /// ID of the element the widget is mounted into
    #[clap(long, value_name = "ID", default_value = DEFAULT_WIDGET_MOUNT_ID)]
    pub mount_id: String,

    /// URL of the widget script
    #[clap(long, value_name = "URL", env = "TRANSITOUS_WIDGET_SCRIPT_URL", default_value = WIDGET_SCRIPT_URL)]
    pub script_url: String,

    /// Write the snippet to this file instead of standard output
    #[clap(short, long, value_name = "FILE")]
    pub output_file: Option<PathBuf>,
}
