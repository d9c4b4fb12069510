use crate::imports::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Embed,
    #[at("/time")]
    Time,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Clone, Default, Deserialize, PartialEq, Serialize)]
pub struct EmbedQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

#[derive(Clone, Default, Deserialize, PartialEq, Serialize)]
pub struct TimeQuery {
    pub utc: Option<String>,
    pub tz: Option<String>,
}
