//! Mushroom edibility.
//! <https://archive.ics.uci.edu/ml/datasets/Mushroom>
//!
//! Edible mushrooms are positive; poisonous or unknown edibility is negative.
//! `?` is a real `stalk_root` category here, so no rows are dropped for it.

use super::{unchanged, Dataset};
use crate::loader::LoadOptions;
use crate::schema::{FeatureSpec, Schema};

const RING_SURFACE: &[&str] = &["f", "y", "k", "s"];
const STALK_COLOR: &[&str] = &["n", "b", "c", "g", "o", "p", "e", "w", "y"];

pub const MUSHROOM: Dataset = Dataset {
    name: "mushroom",
    file: "mushroom.data",
    load: LoadOptions {
        class_column: 0,
        delimiter: b',',
        missing_marker: None,
    },
    schema: Schema {
        negative: "p",
        positive: "e",
        features: &[
            FeatureSpec {
                name: "cap_shape",
                categories: &["b", "c", "x", "f", "k", "s"],
            },
            FeatureSpec {
                name: "cap_surface",
                categories: &["f", "g", "y", "s"],
            },
            FeatureSpec {
                name: "cap_color",
                categories: &["n", "b", "c", "g", "r", "p", "u", "e", "w", "y"],
            },
            FeatureSpec {
                name: "bruises",
                categories: &["t", "f"],
            },
            FeatureSpec {
                name: "odor",
                categories: &["a", "l", "c", "y", "f", "m", "n", "p", "s"],
            },
            FeatureSpec {
                name: "gill_attachment",
                categories: &["a", "d", "f", "n"],
            },
            FeatureSpec {
                name: "gill_spacing",
                categories: &["c", "w", "d"],
            },
            FeatureSpec {
                name: "gill_size",
                categories: &["b", "n"],
            },
            FeatureSpec {
                name: "gill_color",
                categories: &["k", "n", "b", "h", "g", "r", "o", "p", "u", "e", "w", "y"],
            },
            FeatureSpec {
                name: "stalk_shape",
                categories: &["e", "t"],
            },
            FeatureSpec {
                name: "stalk_root",
                categories: &["b", "c", "u", "e", "z", "r", "?"],
            },
            FeatureSpec {
                name: "stalk_surface_above_ring",
                categories: RING_SURFACE,
            },
            FeatureSpec {
                name: "stalk_surface_below_ring",
                categories: RING_SURFACE,
            },
            FeatureSpec {
                name: "stalk_color_above_ring",
                categories: STALK_COLOR,
            },
            FeatureSpec {
                name: "stalk_color_below_ring",
                categories: STALK_COLOR,
            },
            FeatureSpec {
                name: "veil_type",
                categories: &["p", "u"],
            },
            FeatureSpec {
                name: "veil_color",
                categories: &["n", "o", "w", "y"],
            },
            FeatureSpec {
                name: "ring_number",
                categories: &["n", "o", "t"],
            },
            FeatureSpec {
                name: "ring_type",
                categories: &["c", "e", "f", "l", "n", "p", "s", "z"],
            },
            FeatureSpec {
                name: "spore_print_color",
                categories: &["k", "n", "b", "h", "r", "o", "u", "w", "y"],
            },
            FeatureSpec {
                name: "population",
                categories: &["a", "c", "n", "s", "v", "y"],
            },
            FeatureSpec {
                name: "habitat",
                categories: &["g", "l", "m", "p", "u", "w", "d"],
            },
        ],
    },
    title: "ROC curve - mushroom edibility (mushroom.data)",
    line_style: "b:o",
    data_points: 100,
    prepare: unchanged,
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_reader;

    #[test]
    fn source_lines_fit_the_schema() {
        let data = "p,x,s,n,t,p,f,c,n,k,e,e,s,s,w,w,p,w,o,p,k,s,u\n\
                    e,x,s,y,t,a,f,c,b,k,e,c,s,s,w,w,p,w,o,p,n,n,g\n\
                    e,b,s,w,t,l,f,c,b,n,e,?,s,s,w,w,p,w,o,p,n,n,m\n";
        let rows = load_reader(data.as_bytes(), &MUSHROOM.load).unwrap();
        let rows = (MUSHROOM.prepare)(rows).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].len(), MUSHROOM.schema.num_features() + 1);

        let mut model = MUSHROOM.schema.build_model();
        model.train_all(&rows).unwrap();
        assert_eq!(model.total_entries_per_response(), &[1, 2]);
    }
}
