//! Ordered rule tables for prompt slot filling.
//!
//! Every field is described by a table of `(tag, pattern)` pairs. Tables are
//! evaluated top to bottom and the first pattern that matches decides the
//! field; later rules are never consulted. Patterns are compiled once,
//! case-insensitively.

use crate::types::{Accommodation, TravelMode, TripType};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Trailing context that ends a captured place name.
const PLACE_END: &str =
    r"(?:\s+(?:from|for|with|in|on|by|during|and|to|via|next|this|starting)\b|\s*[,.!?;:]|\s+\d|\s*$)";

/// A place name: letters first, then letters, spaces, apostrophes or hyphens.
const PLACE: &str = r"(\p{L}[\p{L}'\- ]*?)";

/// Sightseeing verb between "to" and the place ("to visit Goa"), not captured.
const SIGHTSEEING_VERB: &str = r"(?:(?:visit|see|explore)\s+)?";

/// Amount with optional thousands separators and decimals.
const AMOUNT: &str = r"(\d[\d,]*(?:\.\d+)?)";

/// Optional multiplier marker directly after the amount.
const MULTIPLIER: &str = r"(?:\s*(k|thousand|lakhs?|lacs?)\b)?";

/// A compiled, ordered list of tagged patterns.
#[derive(Debug)]
pub struct RuleSet<R: 'static> {
    rules: Vec<(R, Regex)>,
}

impl<R: Copy> RuleSet<R> {
    fn compile<P: AsRef<str>>(table: &[(R, P)]) -> Self {
        let rules = table
            .iter()
            .map(|(tag, pattern)| {
                let pattern = pattern.as_ref();
                let regex = Regex::new(&format!("(?i){}", pattern))
                    .unwrap_or_else(|err| panic!("invalid rule pattern `{}`: {}", pattern, err));
                (*tag, regex)
            })
            .collect();
        Self { rules }
    }

    /// First rule whose pattern matches, with its captures.
    pub fn first_match<'t>(&self, text: &'t str) -> Option<(R, Captures<'t>)> {
        self.rules
            .iter()
            .find_map(|(tag, regex)| regex.captures(text).map(|caps| (*tag, caps)))
    }

    /// Rule tags in evaluation order
    pub fn tags(&self) -> Vec<R> {
        self.rules.iter().map(|(tag, _)| *tag).collect()
    }
}

/// Tag for the plain keyword-containment tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordTag {
    Mode(TravelMode),
    Stay(Accommodation),
    Theme(TripType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestinationRule {
    /// "go to X", "trip to X", "fly to X", ...
    VerbTo,
    /// "visit X", "visiting X"
    Visit,
    /// any "to X", including "to visit X" and "to explore X"
    To,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OriginRule {
    /// "starting from X", "start in X"
    StartingFrom,
    /// "from X"
    From,
    /// "leaving X", "leaving from X"
    Leaving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaysRule {
    /// "5 days", "3 nights", "5-7 days"
    Days,
    /// "2 weeks"
    Weeks,
    /// "weekend"
    Weekend,
    /// "fortnight"
    Fortnight,
    /// "week" without a number
    BareWeek,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetRule {
    /// "₹25,000", "rs 5k", "$1200"
    CurrencyPrefixed,
    /// "25k", "2 lakh", "30 thousand"
    Suffixed,
    /// "budget of 40000", "budget: 15000"
    Labelled,
    /// "5000 rupees", "800 dollars"
    CurrencyWord,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelersRule {
    Couple,
    Solo,
    Family,
    Group,
    /// "3 people", "4 adults", "6 of us"
    Count,
}

pub fn destination_rules() -> &'static RuleSet<DestinationRule> {
    static RULES: OnceLock<RuleSet<DestinationRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        RuleSet::compile(&[
            (
                DestinationRule::VerbTo,
                format!(
                    r"\b(?:go|going|travel|travell?ing|trip|visit|fly|flying|head|heading|vacation|holiday|getaway)\s+to\s+{}{}{}",
                    SIGHTSEEING_VERB, PLACE, PLACE_END
                ),
            ),
            (
                DestinationRule::Visit,
                format!(r"\bvisit(?:ing)?\s+{}{}", PLACE, PLACE_END),
            ),
            (
                DestinationRule::To,
                format!(r"\bto\s+{}{}{}", SIGHTSEEING_VERB, PLACE, PLACE_END),
            ),
        ])
    })
}

pub fn origin_rules() -> &'static RuleSet<OriginRule> {
    static RULES: OnceLock<RuleSet<OriginRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        RuleSet::compile(&[
            (
                OriginRule::StartingFrom,
                format!(r"\bstart(?:ing)?\s+(?:from|in|at)\s+{}{}", PLACE, PLACE_END),
            ),
            (OriginRule::From, format!(r"\bfrom\s+{}{}", PLACE, PLACE_END)),
            (
                OriginRule::Leaving,
                format!(r"\bleaving\s+(?:from\s+)?{}{}", PLACE, PLACE_END),
            ),
        ])
    })
}

pub fn days_rules() -> &'static RuleSet<DaysRule> {
    static RULES: OnceLock<RuleSet<DaysRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        RuleSet::compile(&[
            (
                DaysRule::Days,
                r"\b(\d{1,4})(?:\s*(?:-|to)\s*\d{1,4})?[\s-]*(?:days?|nights?)\b",
            ),
            (DaysRule::Weeks, r"\b(\d{1,3})[\s-]*weeks?\b"),
            (DaysRule::Weekend, r"\bweekend\b"),
            (DaysRule::Fortnight, r"\bfortnight\b"),
            (DaysRule::BareWeek, r"\bweeks?\b"),
        ])
    })
}

pub fn budget_rules() -> &'static RuleSet<BudgetRule> {
    static RULES: OnceLock<RuleSet<BudgetRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        RuleSet::compile(&[
            (
                BudgetRule::CurrencyPrefixed,
                format!(r"(?:₹|\brs\.?|\binr|\$|€|£)\s*{}{}", AMOUNT, MULTIPLIER),
            ),
            (
                BudgetRule::Suffixed,
                format!(r"\b{}\s*(k|thousand|lakhs?|lacs?)\b", AMOUNT),
            ),
            (
                BudgetRule::Labelled,
                format!(
                    r"\bbudget\s*(?:of|is|:|=|around|about|~)?\s*{}{}",
                    AMOUNT, MULTIPLIER
                ),
            ),
            (
                BudgetRule::CurrencyWord,
                format!(
                    r"\b{}\s*(?:rupees|rs|inr|dollars|usd|euros?|bucks)\b",
                    AMOUNT
                ),
            ),
        ])
    })
}

pub fn travelers_rules() -> &'static RuleSet<TravelersRule> {
    static RULES: OnceLock<RuleSet<TravelersRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        RuleSet::compile(&[
            (
                TravelersRule::Couple,
                r"\b(?:couple|two|partner|wife|husband|girlfriend|boyfriend|honeymoon)\b",
            ),
            (
                TravelersRule::Solo,
                r"\b(?:solo|alone|single|myself)\b",
            ),
            (TravelersRule::Family, r"\bfamily\b"),
            (TravelersRule::Group, r"\b(?:group|gang|friends)\b"),
            (
                TravelersRule::Count,
                r"\b(\d{1,3})\s*(?:people|persons?|pax|adults|travell?ers|members|of us)\b",
            ),
        ])
    })
}

pub fn travel_mode_rules() -> &'static RuleSet<KeywordTag> {
    static RULES: OnceLock<RuleSet<KeywordTag>> = OnceLock::new();
    RULES.get_or_init(|| {
        RuleSet::compile(&[
            (
                KeywordTag::Mode(TravelMode::Flight),
                r"\b(?:flights?|fly|flying|plane|airplane|aeroplane|by air)\b",
            ),
            (
                KeywordTag::Mode(TravelMode::Train),
                r"\b(?:trains?|rail|railway)\b",
            ),
            (
                KeywordTag::Mode(TravelMode::Bus),
                r"\b(?:bus|buses|coach|volvo)\b",
            ),
            (
                KeywordTag::Mode(TravelMode::Car),
                r"\b(?:car|cars|drive|driving|road ?trip|self[- ]drive)\b",
            ),
            (
                KeywordTag::Mode(TravelMode::Mixed),
                r"\b(?:mixed|mix of|combination|multi[- ]?modal)\b",
            ),
        ])
    })
}

pub fn accommodation_rules() -> &'static RuleSet<KeywordTag> {
    static RULES: OnceLock<RuleSet<KeywordTag>> = OnceLock::new();
    RULES.get_or_init(|| {
        RuleSet::compile(&[
            (KeywordTag::Stay(Accommodation::Hotel), r"\bhotels?\b"),
            (
                KeywordTag::Stay(Accommodation::Airbnb),
                r"\b(?:airbnb|apartment|homestay|home stay|rental)\b",
            ),
            (
                KeywordTag::Stay(Accommodation::Hostel),
                r"\b(?:hostels?|backpack(?:er|ing)?|dorm)\b",
            ),
            (
                KeywordTag::Stay(Accommodation::Resort),
                r"\b(?:resorts?|villa)\b",
            ),
            (
                KeywordTag::Stay(Accommodation::Guesthouse),
                r"\b(?:guest ?house|guesthouses|lodge|b&b|bed and breakfast)\b",
            ),
        ])
    })
}

pub fn trip_type_rules() -> &'static RuleSet<KeywordTag> {
    static RULES: OnceLock<RuleSet<KeywordTag>> = OnceLock::new();
    RULES.get_or_init(|| {
        RuleSet::compile(&[
            (
                KeywordTag::Theme(TripType::Adventure),
                r"\b(?:adventure|adventurous|trek|trekking|hike|hiking|paragliding|rafting|ski|skiing|thrill|camping)\b",
            ),
            (
                KeywordTag::Theme(TripType::Relaxation),
                r"\b(?:relax|relaxing|relaxation|chill|peaceful|calm|unwind|beach|beaches|spa)\b",
            ),
            (
                KeywordTag::Theme(TripType::Food),
                r"\b(?:food|foodie|culinary|cuisine|eat|eating|street food|dining)\b",
            ),
            (
                KeywordTag::Theme(TripType::Sightseeing),
                r"\b(?:sightseeing|sights|landmarks?|monuments?|museums?|historical|heritage|tour|touring)\b",
            ),
            (
                KeywordTag::Theme(TripType::Nature),
                r"\b(?:nature|wildlife|mountains?|forests?|lakes?|scenic|waterfalls?|hills?)\b",
            ),
            (
                KeywordTag::Theme(TripType::Nightlife),
                r"\b(?:nightlife|party|parties|clubs?|clubbing|pubs?|bars?)\b",
            ),
            (
                KeywordTag::Theme(TripType::Family),
                r"\b(?:family|kids|children)\b",
            ),
            (
                KeywordTag::Theme(TripType::Business),
                r"\b(?:business|conference|meetings?|work)\b",
            ),
        ])
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_keep_declared_priority() {
        assert_eq!(
            days_rules().tags(),
            vec![
                DaysRule::Days,
                DaysRule::Weeks,
                DaysRule::Weekend,
                DaysRule::Fortnight,
                DaysRule::BareWeek
            ]
        );
        assert_eq!(
            &travelers_rules().tags()[..4],
            &[
                TravelersRule::Couple,
                TravelersRule::Solo,
                TravelersRule::Family,
                TravelersRule::Group
            ]
        );
        assert_eq!(
            travel_mode_rules().tags()[0],
            KeywordTag::Mode(TravelMode::Flight)
        );
    }

    #[test]
    fn first_match_stops_at_earliest_rule() {
        let (rule, caps) = destination_rules()
            .first_match("I want to go to Manali from Delhi")
            .unwrap();
        assert_eq!(rule, DestinationRule::VerbTo);
        assert_eq!(&caps[1], "Manali");
    }

    #[test]
    fn destination_tables_put_visit_before_bare_to() {
        assert_eq!(
            destination_rules().tags(),
            vec![
                DestinationRule::VerbTo,
                DestinationRule::Visit,
                DestinationRule::To
            ]
        );
        let (rule, caps) = destination_rules()
            .first_match("visit Goa next month to relax")
            .unwrap();
        assert_eq!(rule, DestinationRule::Visit);
        assert_eq!(&caps[1], "Goa");
    }

    #[test]
    fn sightseeing_verb_is_not_part_of_the_place() {
        let (rule, caps) = destination_rules()
            .first_match("We'd love to explore Paris")
            .unwrap();
        assert_eq!(rule, DestinationRule::To);
        assert_eq!(&caps[1], "Paris");
        let (_, caps) = destination_rules()
            .first_match("planning a trip to see Jaipur in March")
            .unwrap();
        assert_eq!(&caps[1], "Jaipur");
    }

    #[test]
    fn place_capture_stops_before_digits_and_punctuation() {
        let (_, caps) = origin_rules().first_match("from New Delhi, 3 days").unwrap();
        assert_eq!(&caps[1], "New Delhi");
        let (_, caps) = origin_rules().first_match("from Pune 4 days").unwrap();
        assert_eq!(&caps[1], "Pune");
    }

    #[test]
    fn keyword_families_use_whole_words() {
        assert!(travel_mode_rules().first_match("butterfly garden").is_none());
        assert!(accommodation_rules().first_match("a hotelier friend").is_none());
    }
}
