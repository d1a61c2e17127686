/// One labelled paragraph inside a list item
#[derive(Clone, Debug, PartialEq)]
pub struct FieldSlot {
    pub label: &'static str,
    pub field: &'static str,
}

/// Which entry fields a feed list shows, and under what heading
#[derive(Clone, Debug, PartialEq)]
pub struct FeedLayout {
    pub heading: &'static str,
    pub title_field: &'static str,
    pub fields: Vec<FieldSlot>,
}

impl FeedLayout {
    pub fn generic() -> Self {
        Self {
            heading: "Latest posts",
            title_field: "title",
            fields: vec![FieldSlot { label: "", field: "body" }],
        }
    }

    pub fn yoga() -> Self {
        Self {
            heading: "Yoga benefits",
            title_field: "name",
            fields: vec![
                FieldSlot { label: "Benefits: ", field: "benefits" },
                FieldSlot { label: "Duration: ", field: "time_duration" },
            ],
        }
    }
}
