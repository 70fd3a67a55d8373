use crate::models::stop::{Padding, PaddingConfig};

/// Normalizes a padding specification into the canonical four-side form.
///
/// Sequences of lengths other than 2 or 4 degenerate to all-zero padding.
/// This fallback is contractual: callers rely on malformed shapes being
/// absorbed rather than raised.
pub fn normalize_padding(config: Option<&PaddingConfig>) -> Padding {
    match config {
        None => Padding::default(),
        Some(PaddingConfig::Uniform(value)) => Padding::uniform(*value),
        Some(PaddingConfig::Sequence(values)) => match values.as_slice() {
            [vertical, horizontal] => Padding {
                padding_top: *vertical,
                padding_bottom: *vertical,
                padding_left: *horizontal,
                padding_right: *horizontal,
            },
            [top, right, bottom, left] => Padding {
                padding_top: *top,
                padding_right: *right,
                padding_bottom: *bottom,
                padding_left: *left,
            },
            _ => Padding::default(),
        },
        Some(PaddingConfig::Sides(padding)) => *padding,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_fills_all_four_sides() {
        let padding = normalize_padding(Some(&PaddingConfig::Uniform(7.0)));
        assert_eq!(padding, Padding::uniform(7.0));
    }

    #[test]
    fn two_element_sequence_maps_vertical_then_horizontal() {
        let padding = normalize_padding(Some(&PaddingConfig::Sequence(vec![5.0, 8.0])));
        assert_eq!(
            padding,
            Padding {
                padding_top: 5.0,
                padding_bottom: 5.0,
                padding_left: 8.0,
                padding_right: 8.0,
            }
        );
    }

    #[test]
    fn four_element_sequence_maps_top_right_bottom_left() {
        let padding =
            normalize_padding(Some(&PaddingConfig::Sequence(vec![1.0, 2.0, 3.0, 4.0])));
        assert_eq!(
            padding,
            Padding {
                padding_top: 1.0,
                padding_right: 2.0,
                padding_bottom: 3.0,
                padding_left: 4.0,
            }
        );
    }

    #[test]
    fn explicit_sides_pass_through_unchanged() {
        let sides = Padding {
            padding_top: 1.0,
            padding_right: 2.0,
            padding_bottom: 3.0,
            padding_left: 4.0,
        };
        assert_eq!(normalize_padding(Some(&PaddingConfig::Sides(sides))), sides);
    }

    #[test]
    fn absent_input_yields_zero_padding() {
        assert_eq!(normalize_padding(None), Padding::default());
    }

    #[test]
    fn malformed_sequence_lengths_degrade_to_zero_padding() {
        for values in [vec![], vec![3.0], vec![1.0, 2.0, 3.0], vec![1.0; 5]] {
            let padding = normalize_padding(Some(&PaddingConfig::Sequence(values)));
            assert_eq!(padding, Padding::default());
        }
    }
}
