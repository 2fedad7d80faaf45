use yew::prelude::*;

use crate::components::count_up::CountUp;
use crate::config;
use crate::hooks::use_in_view;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    /// Target number as written in the page copy, e.g. "94" or "187".
    pub value: AttrValue,
    pub label: AttrValue,
    #[prop_or_default]
    pub prefix: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
}

/// Leading integer of `raw`, read the way `parseInt` does: optional
/// whitespace and sign, then digits; anything after the digits is ignored.
pub fn parse_stat_value(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude: i64 = rest[..digits_end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), true);

    let value = match parse_stat_value(&props.value) {
        Some(target) => html! {
            <CountUp
                start={0.0}
                end={target as f64}
                duration={config::STAT_COUNT_UP_DURATION_SECS}
                prefix={props.prefix.clone()}
                suffix={props.suffix.clone()}
                active={in_view}
            />
        },
        None => html! { <>{props.prefix.clone()}{props.value.clone()}{props.suffix.clone()}</> },
    };

    html! {
        <div ref={node} class={classes!("stat-card", in_view.then(|| "visible"))}>
            <div class="stat-value">{value}</div>
            <p class="stat-label">{props.label.clone()}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::parse_stat_value;

    #[test]
    fn reads_leading_digits() {
        assert_eq!(parse_stat_value("94"), Some(94));
        assert_eq!(parse_stat_value("187%"), Some(187));
        assert_eq!(parse_stat_value("  500+ brands"), Some(500));
        assert_eq!(parse_stat_value("-12"), Some(-12));
        assert_eq!(parse_stat_value("+7"), Some(7));
    }

    #[test]
    fn rejects_values_without_leading_digits() {
        assert_eq!(parse_stat_value(""), None);
        assert_eq!(parse_stat_value("n/a"), None);
        assert_eq!(parse_stat_value("-"), None);
        assert_eq!(parse_stat_value("$100"), None);
    }

    #[test]
    fn stops_at_the_decimal_point() {
        assert_eq!(parse_stat_value("3.9"), Some(3));
    }
}
