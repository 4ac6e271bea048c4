use std::collections::HashMap;

pub type RouteParams = HashMap<String, String>;
