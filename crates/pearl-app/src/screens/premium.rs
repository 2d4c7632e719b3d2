//! Premium upgrade screen state.

/// Subscription plans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanId {
    /// Billed monthly
    Monthly,
    /// Billed yearly
    Yearly,
    /// One-time purchase
    Lifetime,
}

/// A subscription plan card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    /// Identifier
    pub id: PlanId,
    /// Card title
    pub title: &'static str,
    /// Price label
    pub price: &'static str,
    /// Billing period label
    pub period: &'static str,
    /// Badge text, if any
    pub badge: Option<&'static str>,
    /// Highlighted as the most popular choice
    pub popular: bool,
}

/// Plans in display order.
pub static PLANS: [Plan; 3] = [
    Plan {
        id: PlanId::Monthly,
        title: "Monthly",
        price: "$9.99",
        period: "/month",
        badge: None,
        popular: false,
    },
    Plan {
        id: PlanId::Yearly,
        title: "Yearly",
        price: "$59.99",
        period: "/year",
        badge: Some("Save 50%"),
        popular: true,
    },
    Plan {
        id: PlanId::Lifetime,
        title: "Lifetime",
        price: "$199.99",
        period: "one-time",
        badge: Some("Best Value"),
        popular: false,
    },
];

/// Premium feature list.
pub const FEATURES: [&str; 8] = [
    "Access to all premium servers",
    "Unlimited bandwidth",
    "No ads",
    "Priority customer support",
    "Advanced security features",
    "Multiple device connections",
    "Kill switch protection",
    "Split tunneling",
];

/// Plan selection. Starts on the yearly plan.
#[derive(Debug, Clone)]
pub struct PremiumState {
    selected: usize,
}

impl Default for PremiumState {
    fn default() -> Self {
        let selected = PLANS.iter().position(|p| p.popular).unwrap_or(0);
        Self { selected }
    }
}

impl PremiumState {
    /// Selected plan.
    pub fn selected(&self) -> &'static Plan {
        &PLANS[self.selected.min(PLANS.len() - 1)]
    }

    /// Select a plan by id.
    pub fn select(&mut self, id: PlanId) {
        if let Some(index) = PLANS.iter().position(|p| p.id == id) {
            self.selected = index;
        }
    }

    /// Select the previous plan, stopping at the first.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Select the next plan, stopping at the last.
    pub fn select_next(&mut self) {
        self.selected = self.selected.saturating_add(1).min(PLANS.len() - 1);
    }

    /// Upgrade button label for the selected plan.
    pub fn upgrade_label(&self) -> String {
        format!("Upgrade Now - {}", self.selected().price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yearly_is_preselected() {
        let premium = PremiumState::default();
        assert_eq!(premium.selected().id, PlanId::Yearly);
        assert_eq!(premium.upgrade_label(), "Upgrade Now - $59.99");
    }

    #[test]
    fn selection_clamps() {
        let mut premium = PremiumState::default();
        premium.select_next();
        premium.select_next();
        assert_eq!(premium.selected().id, PlanId::Lifetime);

        premium.select(PlanId::Monthly);
        premium.select_prev();
        assert_eq!(premium.selected().id, PlanId::Monthly);
    }
}
