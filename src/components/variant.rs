use plotters::style::RGBColor;
use yew::prelude::*;

/// Every colour a component may be tinted with. Class names come from the
/// tables below, never from string building, so the stylesheet can list
/// each one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accent {
    Emerald,
    Blue,
    Purple,
    Amber,
    Indigo,
    Red,
    Green,
    Yellow,
    Gray,
}

impl Accent {
    #[cfg(test)]
    pub const ALL: [Accent; 9] = [
        Accent::Emerald,
        Accent::Blue,
        Accent::Purple,
        Accent::Amber,
        Accent::Indigo,
        Accent::Red,
        Accent::Green,
        Accent::Yellow,
        Accent::Gray,
    ];

    pub fn badge_class(self) -> &'static str {
        match self {
            Accent::Emerald => "badge badge-emerald",
            Accent::Blue => "badge badge-blue",
            Accent::Purple => "badge badge-purple",
            Accent::Amber => "badge badge-amber",
            Accent::Indigo => "badge badge-indigo",
            Accent::Red => "badge badge-red",
            Accent::Green => "badge badge-green",
            Accent::Yellow => "badge badge-yellow",
            Accent::Gray => "badge badge-gray",
        }
    }

    pub fn tab_class(self, active: bool) -> &'static str {
        if !active {
            return "tab";
        }
        match self {
            Accent::Emerald => "tab tab-active tab-emerald",
            Accent::Blue => "tab tab-active tab-blue",
            Accent::Purple => "tab tab-active tab-purple",
            Accent::Amber => "tab tab-active tab-amber",
            Accent::Indigo => "tab tab-active tab-indigo",
            Accent::Red => "tab tab-active tab-red",
            Accent::Green => "tab tab-active tab-green",
            Accent::Yellow => "tab tab-active tab-yellow",
            Accent::Gray => "tab tab-active tab-gray",
        }
    }

    /// Pale card background.
    pub fn surface_class(self) -> &'static str {
        match self {
            Accent::Emerald => "surface-emerald",
            Accent::Blue => "surface-blue",
            Accent::Purple => "surface-purple",
            Accent::Amber => "surface-amber",
            Accent::Indigo => "surface-indigo",
            Accent::Red => "surface-red",
            Accent::Green => "surface-green",
            Accent::Yellow => "surface-yellow",
            Accent::Gray => "surface-gray",
        }
    }

    /// Solid fill for buttons and progress bars.
    pub fn fill_class(self) -> &'static str {
        match self {
            Accent::Emerald => "fill-emerald",
            Accent::Blue => "fill-blue",
            Accent::Purple => "fill-purple",
            Accent::Amber => "fill-amber",
            Accent::Indigo => "fill-indigo",
            Accent::Red => "fill-red",
            Accent::Green => "fill-green",
            Accent::Yellow => "fill-yellow",
            Accent::Gray => "fill-gray",
        }
    }

    pub fn chart_color(self) -> RGBColor {
        match self {
            Accent::Emerald => RGBColor(16, 185, 129),
            Accent::Blue => RGBColor(59, 130, 246),
            Accent::Purple => RGBColor(139, 92, 246),
            Accent::Amber => RGBColor(245, 158, 11),
            Accent::Indigo => RGBColor(99, 102, 241),
            Accent::Red => RGBColor(239, 68, 68),
            Accent::Green => RGBColor(34, 197, 94),
            Accent::Yellow => RGBColor(234, 179, 8),
            Accent::Gray => RGBColor(156, 163, 175),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }

    pub fn accent(self) -> Accent {
        match self {
            Difficulty::Beginner => Accent::Green,
            Difficulty::Intermediate => Accent::Yellow,
            Difficulty::Advanced => Accent::Red,
        }
    }

    /// Filter-tab key used by the challenges section.
    pub fn filter_key(self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub text: AttrValue,
    #[prop_or(Accent::Emerald)]
    pub accent: Accent,
}

#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={props.accent.badge_class()}>{ props.text.clone() }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_accent_has_distinct_classes() {
        let badges: HashSet<_> = Accent::ALL.iter().map(|a| a.badge_class()).collect();
        let surfaces: HashSet<_> = Accent::ALL.iter().map(|a| a.surface_class()).collect();
        let tabs: HashSet<_> = Accent::ALL.iter().map(|a| a.tab_class(true)).collect();
        assert_eq!(badges.len(), Accent::ALL.len());
        assert_eq!(surfaces.len(), Accent::ALL.len());
        assert_eq!(tabs.len(), Accent::ALL.len());
    }

    #[test]
    fn inactive_tabs_share_one_class() {
        assert!(Accent::ALL.iter().all(|a| a.tab_class(false) == "tab"));
    }

    #[test]
    fn difficulty_maps_to_traffic_light() {
        assert_eq!(Difficulty::Beginner.accent(), Accent::Green);
        assert_eq!(Difficulty::Intermediate.accent(), Accent::Yellow);
        assert_eq!(Difficulty::Advanced.accent(), Accent::Red);
        assert_eq!(Difficulty::Advanced.filter_key(), "advanced");
    }
}
