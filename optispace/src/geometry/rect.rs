use crate::fsize;

///Axis-aligned rectangle, defined by its extreme coordinates
#[derive(Clone, Debug, PartialEq, Copy)]
pub struct Rect {
    pub x_min: fsize,
    pub y_min: fsize,
    pub x_max: fsize,
    pub y_max: fsize,
}

impl Rect {
    /// Returns the smallest rectangle containing all `rects`, or `None` if there are none.
    pub fn bounding(rects: impl IntoIterator<Item = Rect>) -> Option<Rect> {
        rects.into_iter().reduce(|a, b| Rect {
            x_min: fsize::min(a.x_min, b.x_min),
            y_min: fsize::min(a.y_min, b.y_min),
            x_max: fsize::max(a.x_max, b.x_max),
            y_max: fsize::max(a.y_max, b.y_max),
        })
    }

    pub fn width(&self) -> fsize {
        self.x_max - self.x_min
    }

    pub fn height(&self) -> fsize {
        self.y_max - self.y_min
    }

    pub fn area(&self) -> fsize {
        self.width() * self.height()
    }

    /// Returns a new rectangle with the same centroid but scaled by `factor`.
    pub fn scale(self, factor: fsize) -> Self {
        let dx = self.width() * (factor - 1.0) / 2.0;
        let dy = self.height() * (factor - 1.0) / 2.0;
        Rect {
            x_min: self.x_min - dx,
            y_min: self.y_min - dy,
            x_max: self.x_max + dx,
            y_max: self.y_max + dy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x_min: fsize, y_min: fsize, x_max: fsize, y_max: fsize) -> Rect {
        Rect {
            x_min,
            y_min,
            x_max,
            y_max,
        }
    }

    #[test]
    fn bounding_of_nothing_is_none() {
        assert_eq!(Rect::bounding(std::iter::empty()), None);
    }

    #[test]
    fn bounding_spans_all() {
        let bbox = Rect::bounding([rect(0.0, 0.0, 2.0, 2.0), rect(7.0, 1.0, 10.0, 3.0)]).unwrap();
        assert_eq!(bbox, rect(0.0, 0.0, 10.0, 3.0));
        assert_eq!(bbox.area(), 30.0);
    }

    #[test]
    fn scaling_keeps_the_centroid() {
        let scaled = rect(0.0, 0.0, 10.0, 4.0).scale(1.5);
        assert_eq!(scaled, rect(-2.5, -1.0, 12.5, 5.0));
    }
}
