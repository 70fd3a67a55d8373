use crate::models::geometry::encode_bounds;
use crate::models::props::MaxBoundsSetting;
use crate::CameraError;

/// Resolves a max-bounds constraint to its serialized form. Returns `None`
/// when either corner is absent.
pub fn resolve_max_bounds(
    setting: Option<&MaxBoundsSetting>,
) -> Result<Option<String>, CameraError> {
    let Some(setting) = setting else {
        return Ok(None);
    };
    let (Some(ne), Some(sw)) = (setting.ne, setting.sw) else {
        return Ok(None);
    };
    Ok(Some(encode_bounds(ne, sw)?))
}

/// Memoizes the resolved max-bounds payload on its source pair, so the
/// constraint is recomputed and re-dispatched only when the pair changes.
#[derive(Debug, Default)]
pub struct MaxBoundsCache {
    source: Option<MaxBoundsSetting>,
    payload: Option<String>,
}

impl MaxBoundsCache {
    /// Updates the cache from a new source pair. Returns `true` when the pair
    /// changed and the payload was recomputed.
    pub fn update(&mut self, setting: Option<&MaxBoundsSetting>) -> Result<bool, CameraError> {
        if self.source.as_ref() == setting {
            return Ok(false);
        }
        self.payload = resolve_max_bounds(setting)?;
        self.source = setting.copied();
        Ok(true)
    }

    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> MaxBoundsSetting {
        MaxBoundsSetting {
            ne: Some([12.0, 34.0]),
            sw: Some([10.0, 30.0]),
        }
    }

    #[test]
    fn missing_corner_resolves_to_none() {
        let half = MaxBoundsSetting {
            ne: Some([12.0, 34.0]),
            sw: None,
        };
        assert!(resolve_max_bounds(Some(&half)).expect("resolve").is_none());
        assert!(resolve_max_bounds(None).expect("resolve").is_none());
    }

    #[test]
    fn full_pair_resolves_to_serialized_bounds() {
        let payload = resolve_max_bounds(Some(&pair()))
            .expect("resolve")
            .expect("payload");
        assert!(payload.contains("\"type\":\"FeatureCollection\""));
        assert!(payload.contains("[12.0,34.0]"));
        assert!(payload.contains("[10.0,30.0]"));
    }

    #[test]
    fn cache_recomputes_only_on_source_change() {
        let mut cache = MaxBoundsCache::default();

        assert!(cache.update(Some(&pair())).expect("update"));
        let first = cache.payload().expect("payload").to_string();

        assert!(!cache.update(Some(&pair())).expect("update"));
        assert_eq!(cache.payload(), Some(first.as_str()));

        let moved = MaxBoundsSetting {
            ne: Some([13.0, 35.0]),
            sw: Some([10.0, 30.0]),
        };
        assert!(cache.update(Some(&moved)).expect("update"));
        assert_ne!(cache.payload(), Some(first.as_str()));
    }

    #[test]
    fn clearing_the_pair_clears_the_payload() {
        let mut cache = MaxBoundsCache::default();
        cache.update(Some(&pair())).expect("update");

        assert!(cache.update(None).expect("update"));
        assert!(cache.payload().is_none());
    }
}
