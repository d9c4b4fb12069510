use crate::imports::*;

/// A start or destination handed to the widget.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum LocationArg {
    NoLocation,
    Location(String),
}

impl LocationArg {
    /// A missing or empty label means no location.
    pub fn from_label(label: Option<&str>) -> LocationArg {
        match label {
            Some(label) if !label.is_empty() => LocationArg::Location(label.to_string()),
            _ => LocationArg::NoLocation,
        }
    }

    pub fn label(&self) -> Option<&str> {
        match self {
            LocationArg::NoLocation => None,
            LocationArg::Location(label) => Some(label),
        }
    }
}

/// The widget's runtime: a location constructor, a "no location" value, and the entry point that
/// renders into a mount point.
pub trait WidgetRuntime {
    type Mount: ?Sized;
    type Location;
    type Error;

    fn location(&self, label: &str) -> Result<Self::Location, Self::Error>;

    fn no_location(&self) -> Result<Self::Location, Self::Error>;

    /// Renders the widget. Arguments are passed in this order before the entry point is invoked.
    fn main(&self, mount: &Self::Mount, start: Self::Location, destination: Self::Location)
        -> Result<(), Self::Error>;

    fn location_value(&self, location: &LocationArg) -> Result<Self::Location, Self::Error> {
        match location {
            LocationArg::NoLocation => self.no_location(),
            LocationArg::Location(label) => self.location(label),
        }
    }
}

/// Mounts the widget. Errors from the runtime are returned as they are.
pub fn launch_widget<R: WidgetRuntime + ?Sized>(
    runtime: &R,
    mount: &R::Mount,
    start: Option<&str>,
    destination: Option<&str>,
) -> Result<(), R::Error> {
    let start = LocationArg::from_label(start);
    let destination = LocationArg::from_label(destination);
    debug!("Launching widget from {:?} to {:?}", start, destination);
    let start = runtime.location_value(&start)?;
    let destination = runtime.location_value(&destination)?;
    runtime.main(mount, start, destination)
}
