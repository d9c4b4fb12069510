use crate::browser::*;
use crate::imports::*;

#[derive(Properties, PartialEq)]
pub struct StopTimeProps {
    pub utc: String,
    #[prop_or_default]
    pub stop_time_zone: Option<String>,
}

#[function_component(StopTime)]
pub fn stop_time_component(props: &StopTimeProps) -> Html {
    match format_times(&BrowserHost, &props.utc, props.stop_time_zone.as_deref()) {
        Ok(TimeResult { stop_time, user_time, show_both }) => html! {
            <span class="stop-time">
                { stop_time }
                { if show_both { html! {
                    <small class="text-muted">{ format!(" ({})", user_time) }</small>
                }} else {
                    html! {}
                }}
            </span>
        },
        Err(err) => {
            error!("{}", err);
            html! { <span class="stop-time text-muted">{ "--:--" }</span> }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TransitousWidgetProps {
    #[prop_or_default]
    pub from: Option<String>,
    #[prop_or_default]
    pub to: Option<String>,
}

#[function_component(TransitousWidget)]
pub fn transitous_widget_component(props: &TransitousWidgetProps) -> Html {
    let mount_ref = use_node_ref();
    {
        let mount_ref = mount_ref.clone();
        // Launch again whenever the locations change; the widget owns the mount element's children
        use_effect_with_deps(
            move |(from, to): &(Option<String>, Option<String>)| {
                if let Some(mount) = mount_ref.cast::<Element>() {
                    let launched = BrowserWidgetRuntime::from_window()
                        .and_then(|runtime| launch_widget(&runtime, &mount, from.as_deref(), to.as_deref()));
                    if let Err(err) = launched {
                        error!("Failed to launch widget: {:?}", err);
                    }
                }
                || ()
            },
            (props.from.clone(), props.to.clone()),
        );
    }
    html! {
        <div class="transitous-widget" ref={mount_ref}/>
    }
}
