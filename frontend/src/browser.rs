use crate::imports::*;

/// The browser's time zone and locale, as reported by `Intl.DateTimeFormat`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserHost;

fn resolved_options(options: &Object) -> Object {
    js_sys::Intl::DateTimeFormat::new(&Array::new(), options).resolved_options()
}

fn resolved_option(options: &Object, key: &str) -> Option<String> {
    Reflect::get(options, &JsValue::from_str(key)).ok().and_then(|value| value.as_string())
}

impl HostEnvironment for BrowserHost {
    fn time_zone(&self) -> Cow<'_, str> {
        let time_zone = resolved_option(&resolved_options(&Object::new()), "timeZone").unwrap_or_else(|| {
            warn!("Browser did not report a time zone, using {}", UTC_TIME_ZONE);
            UTC_TIME_ZONE.to_string()
        });
        Cow::Owned(time_zone)
    }

    fn locale(&self) -> Locale {
        // The hour cycle is only resolved when an hour field is requested
        let format_options = Object::new();
        if let Err(err) = Reflect::set(&format_options, &JsValue::from_str("hour"), &JsValue::from_str("2-digit")) {
            warn!("Could not set date/time format options: {:?}", err);
        }
        let options = resolved_options(&format_options);
        let tag = resolved_option(&options, "locale").unwrap_or_else(|| DEFAULT_LOCALE_TAG.to_string());
        let locale = Locale::parse(&tag).unwrap_or_else(|err| {
            warn!("{:#}", err);
            Locale::default()
        });
        match resolved_option(&options, "hourCycle").map(|hour_cycle| HourCycle::from_str(&hour_cycle)) {
            Some(Ok(hour_cycle)) => locale.with_hour_cycle(hour_cycle),
            _ => locale,
        }
    }
}

/// The widget's global object (`window.TransitousWidget`) installed by its script.
#[derive(Clone, Debug)]
pub struct BrowserWidgetRuntime {
    widget: JsValue,
}

fn into_function(value: JsValue, name: &str) -> Result<Function, JsValue> {
    value.dyn_into::<Function>().map_err(|_| js_sys::TypeError::new(&format!("{} is not a function", name)).into())
}

impl BrowserWidgetRuntime {
    pub fn from_window() -> Result<BrowserWidgetRuntime, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from(js_sys::Error::new("No global window")))?;
        let widget = Reflect::get(&window, &JsValue::from_str(WIDGET_GLOBAL_NAME))?;
        Ok(BrowserWidgetRuntime { widget })
    }

    fn member(&self, name: &str) -> Result<JsValue, JsValue> {
        Reflect::get(&self.widget, &JsValue::from_str(name))
    }
}

impl WidgetRuntime for BrowserWidgetRuntime {
    type Mount = Element;
    type Location = JsValue;
    type Error = JsValue;

    fn location(&self, label: &str) -> Result<JsValue, JsValue> {
        into_function(self.member("location")?, "location")?.call1(&self.widget, &JsValue::from_str(label))
    }

    fn no_location(&self) -> Result<JsValue, JsValue> {
        self.member("noLocation")
    }

    // The entry point takes one argument per call and renders on a final call without arguments
    fn main(&self, mount: &Element, start: JsValue, destination: JsValue) -> Result<(), JsValue> {
        let mount: &JsValue = mount.as_ref();
        let staged = into_function(self.member("main")?, "main")?.call1(&self.widget, mount)?;
        let staged = into_function(staged, "main(parent)")?.call1(&JsValue::NULL, &start)?;
        let staged = into_function(staged, "main(parent)(start)")?.call1(&JsValue::NULL, &destination)?;
        into_function(staged, "main(parent)(start)(destination)")?.call0(&JsValue::NULL)?;
        Ok(())
    }
}
