use formats::{ClusterMethod, ColorField};

/// Client-side view state: which collection is shown and which property
/// drives the fill.
///
/// The state lives in the browser; the server only ever renders the default.
/// The embedded script mirrors this exact logic, and keeping it here as well
/// pins the behavior with unit tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSelection {
    pub method: ClusterMethod,
    pub field: ColorField,
}

impl Default for ViewSelection {
    fn default() -> Self {
        ViewSelection {
            method: ClusterMethod::KMeans,
            field: ColorField::DistrictId,
        }
    }
}

/// One dropdown change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewInput {
    SelectMethod(ClusterMethod),
    SelectField(ColorField),
}

/// Instruction for the renderer after an input: draw this collection,
/// colored by this property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redraw {
    pub method: ClusterMethod,
    pub field: ColorField,
}

impl ViewSelection {
    /// Applies one input and returns the redraw instruction for the new
    /// state. Each input touches exactly one half of the state; the other
    /// half carries over unchanged.
    pub fn apply(&mut self, input: ViewInput) -> Redraw {
        match input {
            ViewInput::SelectMethod(method) => self.method = method,
            ViewInput::SelectField(field) => self.field = field,
        }
        self.redraw()
    }

    pub fn redraw(&self) -> Redraw {
        Redraw {
            method: self.method,
            field: self.field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Redraw, ViewInput, ViewSelection};
    use formats::{ClusterMethod, ColorField};

    #[test]
    fn default_is_kmeans_categorical() {
        let selection = ViewSelection::default();
        assert_eq!(selection.method, ClusterMethod::KMeans);
        assert_eq!(selection.field, ColorField::DistrictId);
    }

    #[test]
    fn method_change_keeps_field() {
        let mut selection = ViewSelection::default();
        selection.apply(ViewInput::SelectField(ColorField::Compactness));
        let redraw = selection.apply(ViewInput::SelectMethod(ClusterMethod::SameSizeKMeans));
        assert_eq!(
            redraw,
            Redraw {
                method: ClusterMethod::SameSizeKMeans,
                field: ColorField::Compactness,
            }
        );
    }

    #[test]
    fn field_change_keeps_method() {
        let mut selection = ViewSelection::default();
        selection.apply(ViewInput::SelectMethod(ClusterMethod::SameSizeKMeans));
        let redraw = selection.apply(ViewInput::SelectField(ColorField::PopulationVariance));
        assert_eq!(
            redraw,
            Redraw {
                method: ClusterMethod::SameSizeKMeans,
                field: ColorField::PopulationVariance,
            }
        );
    }

    #[test]
    fn redraw_reflects_latest_inputs() {
        let mut selection = ViewSelection::default();
        let inputs = [
            ViewInput::SelectField(ColorField::Compactness),
            ViewInput::SelectMethod(ClusterMethod::SameSizeKMeans),
            ViewInput::SelectField(ColorField::DistrictId),
            ViewInput::SelectMethod(ClusterMethod::KMeans),
        ];
        let mut last = selection.redraw();
        for input in inputs {
            last = selection.apply(input);
        }
        assert_eq!(last, selection.redraw());
        assert_eq!(last.method, ClusterMethod::KMeans);
        assert_eq!(last.field, ColorField::DistrictId);
    }
}
