use std::fmt;

/// The navigation key of the landing page, used as the default and
/// "return home" target.

pub const HOME_KEY: &str = "landing";

const SERVICES_PREFIX: &str = "services/";

/// Every view the host can render.

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ViewId {
    Landing,
    About,
    Marketplace,
    VendorsJoin,
    VendorsLogin,
    VendorsPricing,
    Privacy,
    Terms,
    Help,
    Support,

    /// A service page. The candidate is the raw text after `services/`; the
    /// services page decides what to do with unknown candidates.

    Services(String),

    /// The fallback view for any key we don't recognise.

    NotFound,
}

/// Map a navigation key to the view it selects. Never fails: unknown keys
/// resolve to `ViewId::NotFound`.

pub fn resolve(key: &str) -> ViewId {
    match key {
        HOME_KEY => ViewId::Landing,
        "about" => ViewId::About,
        "marketplace" => ViewId::Marketplace,
        "vendors/join" => ViewId::VendorsJoin,
        "vendors/login" => ViewId::VendorsLogin,
        "vendors/pricing" => ViewId::VendorsPricing,
        "privacy" => ViewId::Privacy,
        "terms" => ViewId::Terms,
        "help" => ViewId::Help,
        "support" => ViewId::Support,
        _ => match key.strip_prefix(SERVICES_PREFIX) {
            Some(candidate) => ViewId::Services(candidate.to_owned()),
            None => ViewId::NotFound,
        },
    }
}

impl ViewId {

    /// A navigation key that resolves back to this view. The not-found view
    /// has no key of its own, so it points home.

    pub fn key(&self) -> String {
        match self {
            ViewId::Landing | ViewId::NotFound => HOME_KEY.to_owned(),
            ViewId::About => "about".to_owned(),
            ViewId::Marketplace => "marketplace".to_owned(),
            ViewId::VendorsJoin => "vendors/join".to_owned(),
            ViewId::VendorsLogin => "vendors/login".to_owned(),
            ViewId::VendorsPricing => "vendors/pricing".to_owned(),
            ViewId::Privacy => "privacy".to_owned(),
            ViewId::Terms => "terms".to_owned(),
            ViewId::Help => "help".to_owned(),
            ViewId::Support => "support".to_owned(),
            ViewId::Services(candidate) => format!("{}{}", SERVICES_PREFIX, candidate),
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ViewId::Landing => write!(f, "landing"),
            ViewId::About => write!(f, "about"),
            ViewId::Marketplace => write!(f, "marketplace"),
            ViewId::VendorsJoin => write!(f, "vendors-join"),
            ViewId::VendorsLogin => write!(f, "vendors-login"),
            ViewId::VendorsPricing => write!(f, "vendors-pricing"),
            ViewId::Privacy => write!(f, "privacy"),
            ViewId::Terms => write!(f, "terms"),
            ViewId::Help => write!(f, "help"),
            ViewId::Support => write!(f, "support"),
            ViewId::Services(_) => write!(f, "services"),
            ViewId::NotFound => write!(f, "not-found"),
        }
    }
}
