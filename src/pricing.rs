//! Plan data and the billing-period computation behind the pricing cards.
//!
//! Kept free of any rendering concern so the card math is testable on the
//! host. The section components only ever go through [`price_for`].

/// A pricing tier as displayed on the pricing cards.
///
/// Prices are whole rupees. `yearly_price` already carries the annual
/// discount, so `yearly_price < monthly_price * 12` must hold for every
/// shipped plan ([`validate`] checks this).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub name: &'static str,
    pub monthly_price: u32,
    pub yearly_price: u32,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub popular: bool,
}

/// What a card renders for one plan under the current billing period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceDisplay {
    pub amount: u32,
    pub period: &'static str,
    /// Rupees saved per year versus monthly billing. Only present (and only
    /// rendered) when annual billing is selected.
    pub savings: Option<u32>,
}

/// The three tiers shown on the page.
pub static PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        monthly_price: 999,
        yearly_price: 9_590,
        description: "Perfect for small businesses getting started",
        features: &[
            "1 Website",
            "Free SSL Certificate",
            "Hosting Included",
            "Basic Support",
            "99.9% Uptime",
        ],
        popular: false,
    },
    Plan {
        name: "Growth",
        monthly_price: 1_999,
        yearly_price: 19_190,
        description: "Ideal for growing businesses",
        features: &[
            "3 Websites",
            "Analytics Dashboard",
            "Priority Support",
            "Advanced Security",
            "Custom Domain",
        ],
        popular: true,
    },
    Plan {
        name: "Pro",
        monthly_price: 4_999,
        yearly_price: 47_990,
        description: "For established businesses",
        features: &[
            "Unlimited Sites",
            "AI Chatbot Integration",
            "Dedicated Manager",
            "White-label Options",
            "API Access",
        ],
        popular: false,
    },
];

impl Plan {
    /// Rupees saved per year when billed annually instead of monthly.
    pub fn annual_savings(&self) -> u32 {
        self.monthly_price * 12 - self.yearly_price
    }
}

/// Resolve what a card shows for `plan` under the given billing period.
pub fn price_for(plan: &Plan, annual: bool) -> PriceDisplay {
    if annual {
        PriceDisplay {
            amount: plan.yearly_price,
            period: "/year",
            savings: Some(plan.annual_savings()),
        }
    } else {
        PriceDisplay {
            amount: plan.monthly_price,
            period: "/month",
            savings: None,
        }
    }
}

/// Rupee amount with thousands grouping, e.g. `₹1,999`.
pub fn format_inr(amount: u32) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 + '₹'.len_utf8());
    out.push('₹');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Data-entry checks over the shipped plan table.
///
/// The computation itself is total; the only thing that can go wrong is the
/// table. Run under `debug_assert!` at startup and exercised by the tests.
pub fn validate() -> Result<(), String> {
    validate_plans(&PLANS)
}

fn validate_plans(plans: &[Plan]) -> Result<(), String> {
    for plan in plans {
        if plan.monthly_price == 0 || plan.yearly_price == 0 {
            return Err(format!("plan {}: prices must be positive", plan.name));
        }
        if plan.yearly_price >= plan.monthly_price * 12 {
            return Err(format!(
                "plan {}: yearly price {} is not discounted against {}/month",
                plan.name, plan.yearly_price, plan.monthly_price
            ));
        }
        if plan.features.is_empty() {
            return Err(format!("plan {}: feature list is empty", plan.name));
        }
    }
    let popular = plans.iter().filter(|p| p.popular).count();
    if popular > 1 {
        return Err(format!(
            "at most one plan may be marked popular, found {popular}"
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn by_name(name: &str) -> &'static Plan {
        PLANS
            .iter()
            .find(|p| p.name == name)
            .unwrap_or_else(|| panic!("no plan named {name}"))
    }

    #[test]
    fn monthly_display_uses_monthly_price() {
        for plan in &PLANS {
            let display = price_for(plan, false);
            assert_eq!(display.amount, plan.monthly_price);
            assert_eq!(display.period, "/month");
            assert_eq!(display.savings, None);
        }
    }

    #[test]
    fn annual_display_uses_yearly_price() {
        for plan in &PLANS {
            let display = price_for(plan, true);
            assert_eq!(display.amount, plan.yearly_price);
            assert_eq!(display.period, "/year");
            assert_eq!(display.savings, Some(plan.annual_savings()));
        }
    }

    #[test]
    fn annual_savings_match_the_page_copy() {
        assert_eq!(by_name("Starter").annual_savings(), 2_398);
        assert_eq!(by_name("Growth").annual_savings(), 4_198);
        assert_eq!(by_name("Pro").annual_savings(), 11_998);
    }

    #[test]
    fn savings_never_negative() {
        for plan in &PLANS {
            assert!(
                plan.yearly_price <= plan.monthly_price * 12,
                "plan {} would show negative savings",
                plan.name
            );
        }
    }

    #[test]
    fn double_toggle_restores_the_initial_display() {
        for plan in &PLANS {
            let initial = price_for(plan, false);
            let flipped = price_for(plan, true);
            let back = price_for(plan, false);
            assert_ne!(initial, flipped);
            assert_eq!(initial, back);
        }
    }

    #[test]
    fn growth_is_the_single_popular_plan() {
        let popular: Vec<_> = PLANS.iter().filter(|p| p.popular).collect();
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].name, "Growth");
    }

    #[test]
    fn feature_lists_keep_declared_order() {
        assert_eq!(
            by_name("Starter").features,
            &[
                "1 Website",
                "Free SSL Certificate",
                "Hosting Included",
                "Basic Support",
                "99.9% Uptime",
            ]
        );
        for plan in &PLANS {
            assert_eq!(plan.features.len(), 5);
        }
    }

    #[test]
    fn format_inr_groups_thousands() {
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(1_999), "₹1,999");
        assert_eq!(format_inr(4_999), "₹4,999");
        assert_eq!(format_inr(9_590), "₹9,590");
        assert_eq!(format_inr(19_190), "₹19,190");
        assert_eq!(format_inr(47_990), "₹47,990");
        assert_eq!(format_inr(11_998), "₹11,998");
        assert_eq!(format_inr(12), "₹12");
        assert_eq!(format_inr(1_000_000), "₹1,000,000");
    }

    #[test]
    fn validate_accepts_the_shipped_table() {
        assert!(validate().is_ok());
    }

    #[test]
    fn validate_rejects_an_undiscounted_yearly_price() {
        let mut plans = PLANS;
        plans[0].yearly_price = plans[0].monthly_price * 12;
        let err = validate_plans(&plans).unwrap_err();
        assert!(err.contains("not discounted"), "unexpected error: {err}");
    }

    #[test]
    fn validate_rejects_two_popular_plans() {
        let mut plans = PLANS;
        plans[0].popular = true;
        let err = validate_plans(&plans).unwrap_err();
        assert!(err.contains("popular"), "unexpected error: {err}");
    }

    #[test]
    fn validate_rejects_a_zero_price() {
        let mut plans = PLANS;
        plans[2].monthly_price = 0;
        assert!(validate_plans(&plans).is_err());
    }
}
