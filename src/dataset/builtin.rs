use super::{DatasetIdentity, Rgb};

pub const CELL_POINT_COUNT: usize = 44789;
pub const MNIST_POINT_COUNT: usize = 60000;

const CELL_NAMES: [&str; 18] = [
    "CD56+CD8a-NK MC17",
    "CD8a_CD56+NK MC15",
    "CD56+ILC3 MC6",
    "ILC2 MC4",
    "CD161-ILC MC10",
    "CD56dimCD8a+NK MC16",
    "atypical cells",
    "CD56-ILC3MC8 ",
    "CD8a-MC12",
    "CD27+MC12",
    "CD161-ILC3 or LTi MC9",
    "NKp44+ILC3",
    "ILC1 MC11",
    "CD8a+MC12",
    "unclassified",
    "CD34+MC1-2",
    "CD45RA+ILC3 MC7",
    "CD7_NK MC18",
];

const CELL_COLORS: [Rgb; 18] = [
    Rgb::new(203, 221, 241),
    Rgb::new(51, 153, 255),
    Rgb::new(8, 64, 11),
    Rgb::new(205, 62, 203),
    Rgb::new(198, 116, 108),
    Rgb::new(109, 178, 250),
    Rgb::new(227, 119, 194),
    Rgb::new(29, 126, 24),
    Rgb::new(230, 24, 23),
    Rgb::new(169, 18, 23),
    Rgb::new(169, 254, 170),
    Rgb::new(116, 240, 160),
    Rgb::new(245, 149, 28),
    Rgb::new(202, 205, 36),
    Rgb::new(7, 48, 106),
    Rgb::new(35, 38, 84),
    Rgb::new(166, 180, 166),
    Rgb::new(142, 144, 157),
];

const MNIST_COLORS: [Rgb; 10] = [
    Rgb::new(245, 149, 28),
    Rgb::new(166, 180, 166),
    Rgb::new(8, 64, 11),
    Rgb::new(205, 62, 203),
    Rgb::new(198, 116, 108),
    Rgb::new(109, 178, 250),
    Rgb::new(142, 144, 157),
    Rgb::new(29, 126, 24),
    Rgb::new(35, 38, 84),
    Rgb::new(230, 24, 23),
];

impl DatasetIdentity {
    /// Fetal intestine immune cells, 18 annotated populations
    pub fn cell_cluster() -> Self {
        Self::new(
            "Cell_Cluster",
            CELL_POINT_COUNT,
            ":data/cell_all_labels.bin",
            CELL_NAMES.iter().map(|s| s.to_string()).collect(),
            CELL_COLORS.to_vec(),
        )
    }

    /// MNIST training set, one cluster per digit
    pub fn mnist_cluster() -> Self {
        Self::new(
            "MNIST_Cluster",
            MNIST_POINT_COUNT,
            format!(":data/mnist_{}_labels.bin", MNIST_POINT_COUNT),
            (0..10).map(|d| d.to_string()).collect(),
            MNIST_COLORS.to_vec(),
        )
    }
}
