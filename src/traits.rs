pub trait Zero {
    fn zero() -> Self;
}

pub trait Length {
    fn length(&self) -> f64;
}

pub trait Normalizable {
    fn normalize(&self) -> Self;
}

pub trait Dotable {
    type Operand;
    fn dot(&self, other: &Self::Operand) -> f64;
}

pub trait Crossable {
    type Operand;
    fn cross(&self, other: &Self::Operand) -> Self;
}
