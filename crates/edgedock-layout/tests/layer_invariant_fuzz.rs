//! Property-style invariants over random operation streams.
//!
//! Exercises random register/unregister/resize sequences against the public
//! context API and asserts the structural invariants of the layer sequence:
//! length, single-edge deltas, monotonic accumulation, axis sums, and the
//! register/unregister round trip.

use edgedock_layout::{DockLayout, Edge, Insets, StyleView};
use proptest::prelude::*;

const IDS: [&str; 6] = ["app-bar", "nav", "aside", "footer", "toolbar", "banner"];

#[derive(Debug, Clone)]
enum Op {
    Register { slot: usize, edge: usize, amount: f64 },
    Unregister { slot: usize },
    Resize { slot: usize, amount: f64 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..IDS.len(), 0..Edge::ALL.len(), 0.0..512.0f64)
            .prop_map(|(slot, edge, amount)| Op::Register { slot, edge, amount }),
        (0..IDS.len()).prop_map(|slot| Op::Unregister { slot }),
        (0..IDS.len(), 0.0..512.0f64).prop_map(|(slot, amount)| Op::Resize { slot, amount }),
    ]
}

/// Reference model: the expected registry contents, maintained with the
/// same in-place overwrite / append-if-new semantics.
#[derive(Debug, Default)]
struct Model {
    panels: Vec<(usize, Edge, f64)>,
}

impl Model {
    fn register(&mut self, slot: usize, edge: Edge, amount: f64) {
        match self.panels.iter_mut().find(|(s, _, _)| *s == slot) {
            Some(entry) => *entry = (slot, edge, amount),
            None => self.panels.push((slot, edge, amount)),
        }
    }

    fn unregister(&mut self, slot: usize) {
        self.panels.retain(|(s, _, _)| *s != slot);
    }

    fn resize(&mut self, slot: usize, amount: f64) {
        if let Some(entry) = self.panels.iter_mut().find(|(s, _, _)| *s == slot) {
            entry.2 = amount;
        }
    }
}

fn apply(layout: &DockLayout, model: &mut Model, views: &mut [Option<StyleView>], op: &Op) {
    match *op {
        Op::Register { slot, edge, amount } => {
            let edge = Edge::ALL[edge];
            views[slot] = Some(layout.register(IDS[slot], edge, amount));
            model.register(slot, edge, amount);
        }
        Op::Unregister { slot } => {
            layout.unregister(IDS[slot]);
            model.unregister(slot);
        }
        Op::Resize { slot, amount } => {
            if let Some(view) = &views[slot] {
                view.set_amount(amount).unwrap();
                model.resize(slot, amount);
            }
        }
    }
}

proptest! {
    #[test]
    fn layer_sequence_invariants(ops in proptest::collection::vec(op_strategy(), 0..48)) {
        let layout = DockLayout::new();
        let mut model = Model::default();
        let mut views: Vec<Option<StyleView>> = vec![None; IDS.len()];

        for op in &ops {
            apply(&layout, &mut model, &mut views, op);

            let layers = layout.layers();

            // Length: one layer per active panel plus the base layer.
            prop_assert_eq!(layers.len(), model.panels.len() + 1);
            prop_assert!(layers[0].is_base());

            for (index, (slot, edge, amount)) in model.panels.iter().enumerate() {
                let layer = &layers[index + 1];
                // Registration order is preserved.
                prop_assert_eq!(layer.id.as_ref().unwrap().as_str(), IDS[*slot]);

                // Exactly one edge changed, by exactly this panel's amount.
                let previous = &layers[index].insets;
                for probe in Edge::ALL {
                    if probe == *edge {
                        prop_assert_eq!(layer.insets.get(probe), previous.get(probe) + amount);
                    } else {
                        prop_assert_eq!(layer.insets.get(probe), previous.get(probe));
                    }
                    // Monotonic accumulation.
                    prop_assert!(layer.insets.get(probe) >= previous.get(probe));
                }
            }

            // Final layer equals the per-edge sums, independent of interleaving.
            let mut expected = Insets::ZERO;
            for (_, edge, amount) in &model.panels {
                expected = expected.added(*edge, *amount);
            }
            prop_assert_eq!(layout.padding(), expected);
        }
    }

    #[test]
    fn register_unregister_round_trips(ops in proptest::collection::vec(op_strategy(), 0..32)) {
        let layout = DockLayout::new();
        let mut model = Model::default();
        let mut views: Vec<Option<StyleView>> = vec![None; IDS.len()];

        for op in &ops {
            apply(&layout, &mut model, &mut views, op);
        }

        let layers_before = layout.layers();
        let padding_before = layout.padding();

        let probe = layout.register("round-trip-probe", Edge::Right, 123.0);
        prop_assert!(probe.style().is_ok());
        layout.unregister("round-trip-probe");

        prop_assert_eq!(layout.layers(), layers_before);
        prop_assert_eq!(layout.padding(), padding_before);
    }

    #[test]
    fn z_index_strictly_decreases(ops in proptest::collection::vec(op_strategy(), 1..32)) {
        let layout = DockLayout::new();
        let mut model = Model::default();
        let mut views: Vec<Option<StyleView>> = vec![None; IDS.len()];

        for op in &ops {
            apply(&layout, &mut model, &mut views, op);
        }

        let mut last_z = i32::MAX;
        for (slot, _, _) in &model.panels {
            let style = views[*slot].as_ref().unwrap().style().unwrap();
            prop_assert!(style.z_index < last_z);
            // Content sits below every panel.
            prop_assert!(style.z_index >= 1);
            last_z = style.z_index;
        }
    }
}
