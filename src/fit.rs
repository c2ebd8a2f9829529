//! Greedy fitting of a recipient list into a bounded row.
//!
//! Given the available width and a text metric, decide which prefix of the
//! list is shown, how many recipients are reported as hidden, and whether a
//! lone recipient must be visually clipped.

use serde::Serialize;
use tracing::trace;

/// Separator placed between visible addresses.
pub const SEPARATOR: &str = ", ";

/// Marker appended after the visible prefix when anything is hidden.
pub const MARKER: &str = ", ...";

/// Text rendered by the count indicator for `count` hidden recipients.
#[must_use]
pub fn indicator_label(count: usize) -> String {
    format!("+{count}")
}

/// Width-of capability: rendered width of a string under the row's font.
pub trait TextMetric {
    fn width_of(&self, text: &str) -> f64;
}

impl<F> TextMetric for F
where
    F: Fn(&str) -> f64,
{
    fn width_of(&self, text: &str) -> f64 {
        self(text)
    }
}

/// Outcome of fitting a recipient list into a row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LayoutDecision {
    /// Number of leading recipients rendered in full.
    pub visible_prefix_len: usize,
    /// Recipients past the visible prefix.
    pub hidden_count: usize,
    /// A lone recipient that does not fit and is clipped with an ellipsis.
    pub first_item_clipped: bool,
}

impl LayoutDecision {
    /// Whether the `, ...` marker follows the visible prefix.
    #[must_use]
    pub const fn shows_marker(&self) -> bool {
        self.hidden_count > 0
    }

    /// Whether the count indicator is rendered.
    ///
    /// A single recipient never produces a hidden count, so this also covers
    /// the "never for one recipient" rule.
    #[must_use]
    pub const fn shows_indicator(&self) -> bool {
        self.hidden_count > 0
    }

    /// The visible prefix of `items`.
    #[must_use]
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible_prefix_len.min(items.len())]
    }
}

/// Clamp a measured width so the scan stays total.
fn sanitize(width: f64) -> f64 {
    if width.is_finite() && width > 0.0 {
        width
    } else {
        0.0
    }
}

fn measure(metric: &impl TextMetric, text: &str) -> f64 {
    sanitize(metric.width_of(text))
}

/// Decide how much of `addresses` fits in `available_width`.
///
/// Addresses are accepted left to right while each one still leaves room for
/// the marker and the indicator. Only address widths are charged; the
/// separators between them are not. The indicator width is reserved for the full
/// count up front and checked once more against the final hidden count,
/// evicting at most one address.
#[must_use]
pub fn fit<S: AsRef<str>>(
    addresses: &[S],
    available_width: f64,
    metric: &impl TextMetric,
) -> LayoutDecision {
    let total = addresses.len();
    let available = sanitize(available_width);

    let decision = match total {
        0 => LayoutDecision::default(),
        1 => LayoutDecision {
            visible_prefix_len: 1,
            hidden_count: 0,
            first_item_clipped: measure(metric, addresses[0].as_ref()) > available,
        },
        _ => fit_many(addresses, available, metric),
    };

    trace!(
        total,
        available,
        visible = decision.visible_prefix_len,
        hidden = decision.hidden_count,
        clipped = decision.first_item_clipped,
        "Fitted recipient row"
    );
    decision
}

fn fit_many<S: AsRef<str>>(
    addresses: &[S],
    available: f64,
    metric: &impl TextMetric,
) -> LayoutDecision {
    let total = addresses.len();
    let widths: Vec<f64> = addresses
        .iter()
        .map(|address| measure(metric, address.as_ref()))
        .collect();

    if widths.iter().sum::<f64>() <= available {
        return LayoutDecision {
            visible_prefix_len: total,
            hidden_count: 0,
            first_item_clipped: false,
        };
    }

    let ellipsis = measure(metric, MARKER);
    let provisional_indicator = measure(metric, &indicator_label(total));

    let mut used = 0.0;
    let mut visible = 0;
    for (i, width) in widths.iter().enumerate() {
        let remaining = available - used;
        if i == total - 1 || remaining < width + ellipsis + provisional_indicator {
            break;
        }
        used += width;
        visible += 1;
    }

    let indicator = measure(metric, &indicator_label(total - visible));
    if visible > 0 && used + ellipsis + indicator > available {
        visible -= 1;
    }

    LayoutDecision {
        visible_prefix_len: visible,
        hidden_count: total - visible,
        first_item_clipped: false,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    /// Metric from the row scenarios: every address is 100 wide, the marker
    /// 40, any indicator 30, separators free.
    fn scenario_metric(text: &str) -> f64 {
        if text == MARKER {
            40.0
        } else if text.starts_with('+') {
            30.0
        } else if text == SEPARATOR {
            0.0
        } else {
            100.0
        }
    }

    fn char_metric(text: &str) -> f64 {
        f64::from(u32::try_from(text.chars().count()).unwrap_or(u32::MAX))
    }

    const THREE: [&str; 3] = ["a@x.com", "b@x.com", "c@x.com"];

    #[test]
    fn test_empty_list() {
        let empty: [&str; 0] = [];
        assert_eq!(fit(&empty, 500.0, &scenario_metric), LayoutDecision::default());
    }

    #[test]
    fn test_first_fits_second_does_not() {
        let decision = fit(&THREE, 260.0, &scenario_metric);
        assert_eq!(decision.visible_prefix_len, 1);
        assert_eq!(decision.hidden_count, 2);
        assert!(!decision.first_item_clipped);
        assert!(decision.shows_marker());
        assert!(decision.shows_indicator());
    }

    #[test]
    fn test_single_overlong_address_is_clipped_not_hidden() {
        let decision = fit(&["only@one.com"], 50.0, &scenario_metric);
        assert_eq!(
            decision,
            LayoutDecision {
                visible_prefix_len: 1,
                hidden_count: 0,
                first_item_clipped: true,
            }
        );
        assert!(!decision.shows_indicator());
    }

    #[test]
    fn test_single_address_that_fits() {
        let decision = fit(&["only@one.com"], 100.0, &scenario_metric);
        assert!(!decision.first_item_clipped);
        assert_eq!(decision.hidden_count, 0);
    }

    #[test]
    fn test_everything_fits() {
        let decision = fit(&THREE, 300.0, &scenario_metric);
        assert_eq!(decision.visible_prefix_len, 3);
        assert_eq!(decision.hidden_count, 0);
        assert!(!decision.shows_marker());
        assert!(!decision.shows_indicator());
    }

    #[test]
    fn test_nothing_fits() {
        let decision = fit(&THREE, 169.0, &scenario_metric);
        assert_eq!(decision.visible_prefix_len, 0);
        assert_eq!(decision.hidden_count, 3);
    }

    #[test]
    fn test_exact_fit_is_accepted() {
        // 100 + 40 + 30 leaves exactly nothing.
        let decision = fit(&THREE, 170.0, &scenario_metric);
        assert_eq!(decision.visible_prefix_len, 1);
    }

    #[test]
    fn test_zero_and_negative_width() {
        for width in [0.0, -25.0, f64::NAN] {
            let decision = fit(&THREE, width, &scenario_metric);
            assert_eq!(decision.visible_prefix_len, 0, "width {width}");
            assert_eq!(decision.hidden_count, 3, "width {width}");

            let single = fit(&["a@x.com"], width, &scenario_metric);
            assert!(single.first_item_clipped, "width {width}");
            assert_eq!(single.hidden_count, 0, "width {width}");
        }
    }

    #[test]
    fn test_degenerate_metric_is_treated_as_zero() {
        let broken = |text: &str| if text == MARKER { f64::NAN } else { -3.0 };
        let decision = fit(&THREE, 10.0, &broken);
        assert_eq!(decision.visible_prefix_len, 3);
        assert_eq!(decision.hidden_count, 0);
    }

    #[test]
    fn test_separators_are_not_charged() {
        // Address widths alone decide: 4 + 4 + 4 = 12 fits in 12.
        let list = ["aaaa", "bbbb", "cccc"];
        assert_eq!(fit(&list, 12.0, &char_metric).hidden_count, 0);

        // 15 columns: "aaaa" (4) + ", ..." (5) + "+4" (2) = 11 fits, then
        // "bbbb" fits exactly in the remaining 11, "cccc" does not.
        let list = ["aaaa", "bbbb", "cccc", "dddd"];
        let decision = fit(&list, 15.0, &char_metric);
        assert_eq!(decision.visible_prefix_len, 2);
        assert_eq!(decision.hidden_count, 2);
    }

    #[test]
    fn test_last_address_never_squeezed_in_with_marker() {
        // The last address is only shown when the whole list fits.
        let list = ["a", "b", "averyveryverylongaddress"];
        let decision = fit(&list, 20.0, &char_metric);
        assert_eq!(decision.visible_prefix_len, 2);
        assert_eq!(decision.hidden_count, 1);
    }

    #[test]
    fn test_indicator_reserved_for_full_count_at_digit_boundary() {
        // Ten one-column addresses: the scan reserves "+10" (3 columns) even
        // though hiding nine would only need "+9". A single pass with one
        // correction keeps the conservative result.
        let list = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
        // Exact fixed point would show "a" + ", ..." + "+9" = 1 + 5 + 2 = 8.
        let decision = fit(&list, 8.0, &char_metric);
        assert_eq!(decision.visible_prefix_len, 0);
        assert_eq!(decision.hidden_count, 10);

        let decision = fit(&list, 9.0, &char_metric);
        assert_eq!(decision.visible_prefix_len, 1);
        assert_eq!(decision.hidden_count, 9);
    }

    #[test]
    fn test_corrective_eviction_with_wider_final_indicator() {
        // A metric where fewer hidden recipients render wider: the provisional
        // reservation underestimates and the final check evicts one address.
        let metric = |text: &str| match text {
            "+3" => 0.0,
            "+2" => 50.0,
            t if t == MARKER => 10.0,
            t if t == SEPARATOR => 0.0,
            _ => 40.0,
        };
        let list = ["a", "b", "c"];
        let decision = fit(&list, 60.0, &metric);
        assert_eq!(decision.visible_prefix_len, 0);
        assert_eq!(decision.hidden_count, 3);
    }

    #[test]
    fn test_visible_slice() {
        let decision = fit(&THREE, 260.0, &scenario_metric);
        assert_eq!(decision.visible(&THREE), &["a@x.com"]);
    }

    fn address_list() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-z]{1,12}@[a-z]{1,6}\\.com", 0..24)
    }

    proptest! {
        #[test]
        fn partition_holds(list in address_list(), width in 0.0f64..400.0) {
            let decision = fit(&list, width, &char_metric);
            prop_assert_eq!(decision.visible_prefix_len + decision.hidden_count, list.len());
            if list.len() == 1 {
                prop_assert_eq!(decision.hidden_count, 0);
            }
            if list.len() > 1 {
                prop_assert!(!decision.first_item_clipped);
            }
        }

        #[test]
        fn fit_is_idempotent(list in address_list(), width in 0.0f64..400.0) {
            prop_assert_eq!(fit(&list, width, &char_metric), fit(&list, width, &char_metric));
        }

        #[test]
        fn wider_never_shows_less(
            list in address_list(),
            width in 0.0f64..300.0,
            extra in 0.0f64..200.0,
        ) {
            let narrow = fit(&list, width, &char_metric);
            let wide = fit(&list, width + extra, &char_metric);
            prop_assert!(wide.visible_prefix_len >= narrow.visible_prefix_len);
        }

        #[test]
        fn reserved_budget_holds(list in address_list(), width in 0.0f64..400.0) {
            let decision = fit(&list, width, &char_metric);
            prop_assume!(list.len() > 1);
            let shown: f64 = decision.visible(&list).iter().map(|a| char_metric(a)).sum();
            if decision.shows_marker() {
                if decision.visible_prefix_len > 0 {
                    let indicator = char_metric(&indicator_label(decision.hidden_count));
                    prop_assert!(shown + char_metric(MARKER) + indicator <= width);
                }
            } else {
                prop_assert!(shown <= width);
            }
        }
    }
}
