//! Collectible items placed on maze paths. Items are points, not geometry.

use blockmaze_grid::{HeightField, HeightGrid};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub x: i32,
    pub y: i32,
    pub z: i32,
    pub collected: bool,
}

impl Item {
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self {
            x,
            y,
            z,
            collected: false,
        }
    }
}

fn taken(items: &[Item], x: i32, z: i32) -> bool {
    items.iter().any(|it| it.x == x && it.z == z)
}

/// Places up to `count` items on distinct interior cells at `path_height`.
///
/// Random picks come first (at most `size * size` attempts), then a fixed
/// list of fallback spots. If nothing qualifies, one item is put at
/// (1, path_height, 1) so it becomes collectable once that column is dug out.
pub fn place_items(
    grid: &HeightGrid,
    count: usize,
    path_height: i32,
    rng: &mut fastrand::Rng,
) -> Vec<Item> {
    let mut items: Vec<Item> = Vec::with_capacity(count);
    if count == 0 {
        return items;
    }
    let size = grid.size() as i32;

    if size > 2 {
        let mut attempts = 0;
        while items.len() < count && attempts < size * size {
            let x = rng.i32(1..size - 1);
            let z = rng.i32(1..size - 1);
            if grid.get_height(x, z) == path_height && !taken(&items, x, z) {
                items.push(Item::new(x, grid.get_height(x, z), z));
            }
            attempts += 1;
        }
    }

    let fallback = [(1, 1), (size - 2, size - 2), (size / 2, size / 2)];
    for (x, z) in fallback {
        if items.len() >= count {
            break;
        }
        if grid.in_bounds(x, z) && grid.get_height(x, z) == path_height && !taken(&items, x, z) {
            items.push(Item::new(x, grid.get_height(x, z), z));
        }
    }

    if items.is_empty() {
        log::warn!("no path cell available for items; placing one at (1, 1)");
        items.push(Item::new(1, path_height, 1));
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockmaze_grid::perimeter;

    #[test]
    fn items_avoid_walls_and_duplicates() {
        let grid = perimeter(10, 4, 4);
        let mut rng = fastrand::Rng::with_seed(3);
        let items = place_items(&grid, 5, 0, &mut rng);
        assert_eq!(items.len(), 5);
        for (i, a) in items.iter().enumerate() {
            assert!(a.x >= 1 && a.x <= 8 && a.z >= 1 && a.z <= 8);
            assert_eq!(a.y, 0);
            assert!(!a.collected);
            for b in &items[i + 1..] {
                assert!(a.x != b.x || a.z != b.z);
            }
        }
    }

    #[test]
    fn zero_count_places_nothing() {
        let grid = perimeter(8, 4, 4);
        assert!(place_items(&grid, 0, 0, &mut fastrand::Rng::with_seed(1)).is_empty());
    }

    #[test]
    fn solid_grid_falls_back_to_origin_cell() {
        let grid = HeightGrid::from_heights(6, 4, vec![3; 36]);
        let items = place_items(&grid, 3, 0, &mut fastrand::Rng::with_seed(9));
        assert_eq!(items, vec![Item::new(1, 0, 1)]);
    }
}
