use std::fmt;
use std::str::FromStr;

/// The planning tools described on the services pages.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ServiceKind {
    Planning,
    Guests,
    Budget,
    Timeline,
    Seating,
}

/// Static copy for one service page.

#[derive(PartialEq, Debug)]
pub struct ServiceContent {
    pub title: &'static str,
    pub tagline: &'static str,
    pub features: &'static [&'static str],
    pub benefits: &'static [&'static str],
}

const PLANNING: ServiceContent = ServiceContent {
    title: "Wedding Planning",
    tagline: "Every task, vendor and deadline in one place.",
    features: &[
        "Personalised planning checklist",
        "Vendor shortlists and messaging",
        "Shared access for your partner and planner",
        "Reminders for upcoming deadlines",
    ],
    benefits: &[
        "Nothing slips through the cracks",
        "Less time in spreadsheets",
        "Everyone stays on the same page",
    ],
};

const GUESTS: ServiceContent = ServiceContent {
    title: "Guest Management",
    tagline: "Invitations, RSVPs and dietary needs without the chaos.",
    features: &[
        "Import guests from a spreadsheet",
        "Online RSVP collection",
        "Meal and dietary preference tracking",
        "Plus-one and household grouping",
    ],
    benefits: &[
        "Always know your head count",
        "Fewer follow-up calls",
        "Caterer-ready meal totals",
    ],
};

const BUDGET: ServiceContent = ServiceContent {
    title: "Budget Tracker",
    tagline: "See where every dollar goes before it's gone.",
    features: &[
        "Category budgets with live totals",
        "Deposit and payment due dates",
        "Estimated versus actual spend",
        "Receipts attached to each expense",
    ],
    benefits: &[
        "No surprise overspending",
        "Payments made on time",
        "Clear trade-offs between categories",
    ],
};

const TIMELINE: ServiceContent = ServiceContent {
    title: "Timeline Builder",
    tagline: "A day-of schedule your whole team can follow.",
    features: &[
        "Drag-and-drop run sheet",
        "Vendor arrival and setup times",
        "Shareable links for the wedding party",
        "Printable day-of itinerary",
    ],
    benefits: &[
        "A calm, well-paced day",
        "Vendors know exactly when to arrive",
        "One source of truth for the schedule",
    ],
};

const SEATING: ServiceContent = ServiceContent {
    title: "Seating Chart",
    tagline: "Arrange tables and seats with a few clicks.",
    features: &[
        "Visual floor plan editor",
        "Drag guests between tables",
        "Conflict and relationship notes",
        "Export place cards and escort lists",
    ],
    benefits: &[
        "Happier guests at every table",
        "Last-minute changes in seconds",
        "Venue-ready layouts",
    ],
};

impl ServiceKind {
    pub const ALL: [ServiceKind; 5] = [
        ServiceKind::Planning,
        ServiceKind::Guests,
        ServiceKind::Budget,
        ServiceKind::Timeline,
        ServiceKind::Seating,
    ];

    /// Look a service up by key, falling back to planning when the key is
    /// missing or unknown.

    pub fn from_key(key: &str) -> ServiceKind {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .unwrap_or(ServiceKind::Planning)
    }

    pub fn key(self) -> &'static str {
        match self {
            ServiceKind::Planning => "planning",
            ServiceKind::Guests => "guests",
            ServiceKind::Budget => "budget",
            ServiceKind::Timeline => "timeline",
            ServiceKind::Seating => "seating",
        }
    }

    pub fn content(self) -> &'static ServiceContent {
        match self {
            ServiceKind::Planning => &PLANNING,
            ServiceKind::Guests => &GUESTS,
            ServiceKind::Budget => &BUDGET,
            ServiceKind::Timeline => &TIMELINE,
            ServiceKind::Seating => &SEATING,
        }
    }
}

/// Vendor subscription plans shown on the pricing page.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PlanKind {
    Starter,
    Professional,
    Premium,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum BillingCycle {
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn toggled(self) -> BillingCycle {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }
}

#[derive(PartialEq, Debug)]
pub struct PlanDetails {
    pub name: &'static str,
    pub description: &'static str,

    /// Price per month in whole dollars when billed monthly.
    pub monthly_price: u32,

    /// Price per month in whole dollars when billed yearly.
    pub yearly_price: u32,

    pub features: &'static [&'static str],
    pub highlighted: bool,
}

impl PlanDetails {
    pub fn price(&self, cycle: BillingCycle) -> u32 {
        match cycle {
            BillingCycle::Monthly => self.monthly_price,
            BillingCycle::Yearly => self.yearly_price,
        }
    }

    /// Dollars saved over a year by paying yearly instead of monthly.

    pub fn yearly_savings(&self) -> u32 {
        self.monthly_price.saturating_sub(self.yearly_price) * 12
    }
}

const STARTER: PlanDetails = PlanDetails {
    name: "Starter",
    description: "Get listed and start receiving enquiries.",
    monthly_price: 29,
    yearly_price: 24,
    features: &[
        "Marketplace listing",
        "Up to 10 portfolio photos",
        "Enquiry inbox",
    ],
    highlighted: false,
};

const PROFESSIONAL: PlanDetails = PlanDetails {
    name: "Professional",
    description: "Stand out to couples in your area.",
    monthly_price: 79,
    yearly_price: 66,
    features: &[
        "Everything in Starter",
        "Unlimited portfolio photos",
        "Featured placement in search",
        "Booking calendar",
        "Review management",
    ],
    highlighted: true,
};

const PREMIUM: PlanDetails = PlanDetails {
    name: "Premium",
    description: "For established businesses with a team.",
    monthly_price: 149,
    yearly_price: 124,
    features: &[
        "Everything in Professional",
        "Top placement in your category",
        "Team accounts",
        "Performance analytics",
        "Priority support",
    ],
    highlighted: false,
};

impl PlanKind {
    pub const ALL: [PlanKind; 3] = [PlanKind::Starter, PlanKind::Professional, PlanKind::Premium];

    /// Look a plan up by key, falling back to the highlighted plan.

    pub fn from_key(key: &str) -> PlanKind {
        Self::ALL
            .into_iter()
            .find(|kind| kind.key() == key)
            .unwrap_or(PlanKind::Professional)
    }

    pub fn key(self) -> &'static str {
        match self {
            PlanKind::Starter => "starter",
            PlanKind::Professional => "professional",
            PlanKind::Premium => "premium",
        }
    }

    pub fn details(self) -> &'static PlanDetails {
        match self {
            PlanKind::Starter => &STARTER,
            PlanKind::Professional => &PROFESSIONAL,
            PlanKind::Premium => &PREMIUM,
        }
    }
}

/// The business categories a vendor can register under.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum VendorCategory {
    Photographer,
    Videographer,
    Venue,
    Caterer,
    Florist,
    Baker,
    Musician,
    Dj,
    Planner,
    Decorator,
    Makeup,
    Hair,
    Transportation,
    Officiant,
}

#[derive(PartialEq, Debug)]
pub struct VendorCategoryParseError;

impl VendorCategory {
    pub const ALL: [VendorCategory; 14] = [
        VendorCategory::Photographer,
        VendorCategory::Videographer,
        VendorCategory::Venue,
        VendorCategory::Caterer,
        VendorCategory::Florist,
        VendorCategory::Baker,
        VendorCategory::Musician,
        VendorCategory::Dj,
        VendorCategory::Planner,
        VendorCategory::Decorator,
        VendorCategory::Makeup,
        VendorCategory::Hair,
        VendorCategory::Transportation,
        VendorCategory::Officiant,
    ];

    pub fn label(self) -> &'static str {
        match self {
            VendorCategory::Photographer => "Photographer",
            VendorCategory::Videographer => "Videographer",
            VendorCategory::Venue => "Venue",
            VendorCategory::Caterer => "Caterer",
            VendorCategory::Florist => "Florist",
            VendorCategory::Baker => "Baker / Cake Designer",
            VendorCategory::Musician => "Musician / Band",
            VendorCategory::Dj => "DJ",
            VendorCategory::Planner => "Wedding Planner",
            VendorCategory::Decorator => "Decorator",
            VendorCategory::Makeup => "Makeup Artist",
            VendorCategory::Hair => "Hair Stylist",
            VendorCategory::Transportation => "Transportation",
            VendorCategory::Officiant => "Officiant",
        }
    }
}

impl FromStr for VendorCategory {
    type Err = VendorCategoryParseError;
    fn from_str(input: &str) -> Result<VendorCategory, Self::Err> {
        VendorCategory::ALL
            .into_iter()
            .find(|category| category.to_string() == input)
            .ok_or(VendorCategoryParseError)
    }
}

impl fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let key = match *self {
            VendorCategory::Photographer => "photographer",
            VendorCategory::Videographer => "videographer",
            VendorCategory::Venue => "venue",
            VendorCategory::Caterer => "caterer",
            VendorCategory::Florist => "florist",
            VendorCategory::Baker => "baker",
            VendorCategory::Musician => "musician",
            VendorCategory::Dj => "dj",
            VendorCategory::Planner => "planner",
            VendorCategory::Decorator => "decorator",
            VendorCategory::Makeup => "makeup",
            VendorCategory::Hair => "hair",
            VendorCategory::Transportation => "transportation",
            VendorCategory::Officiant => "officiant",
        };
        write!(f, "{}", key)
    }
}
