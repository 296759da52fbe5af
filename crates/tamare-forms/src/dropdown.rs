/// Open/closed state of a selection list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Dropdown {
    #[default]
    Closed,
    Open,
}

impl Dropdown {
    pub fn is_open(self) -> bool {
        self == Dropdown::Open
    }

    pub fn toggle(&mut self) {
        *self = match self {
            Dropdown::Closed => Dropdown::Open,
            Dropdown::Open => Dropdown::Closed,
        };
    }

    pub fn close(&mut self) {
        *self = Dropdown::Closed;
    }
}
