use crate::entities::{PartList, Stock};
use crate::io::ext_repr::ExtInstance;
use anyhow::{Result, ensure};
use log::info;

/// Imports a cutting job into the library: validates the stock and expands every
/// cut request into its demanded number of parts, ids following request order.
pub fn import(ext_instance: &ExtInstance) -> Result<(PartList, Stock)> {
    let stock = Stock::new(
        ext_instance.stock.width,
        ext_instance.stock.length,
        ext_instance.stock.height,
        ext_instance.blade_kerf,
    )?;

    let mut part_list = PartList::new();
    for (i, request) in ext_instance.parts.iter().enumerate() {
        ensure!(
            request.width > 0.0 && request.length > 0.0 && request.thickness > 0.0,
            "cut request {} must have positive dimensions: {} x {} x {}",
            i,
            request.width,
            request.length,
            request.thickness
        );
        ensure!(
            request.thickness <= ext_instance.stock.height,
            "cut request {} is thicker than the stock: {} > {}",
            i,
            request.thickness,
            ext_instance.stock.height
        );
        ensure!(
            request.demand >= 1,
            "cut request {} must demand at least one part",
            i
        );
        part_list.add(request.width, request.length, request.thickness, request.demand);
    }

    info!(
        "[IMPORT] '{}': {} cut requests expanded into {} parts",
        ext_instance.name,
        ext_instance.parts.len(),
        part_list.len()
    );

    Ok((part_list, stock))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::ext_repr::{ExtCutRequest, ExtStock};

    fn ext_instance(parts: Vec<ExtCutRequest>) -> ExtInstance {
        ExtInstance {
            name: "test".to_string(),
            stock: ExtStock {
                width: 400.0,
                length: 500.0,
                height: 300.0,
            },
            blade_kerf: 2.0,
            parts,
        }
    }

    #[test]
    fn demand_expands_into_individual_parts() {
        let ext = ext_instance(vec![
            ExtCutRequest {
                width: 100.0,
                length: 200.0,
                thickness: 40.0,
                demand: 3,
            },
            ExtCutRequest {
                width: 50.0,
                length: 60.0,
                thickness: 40.0,
                demand: 1,
            },
        ]);
        let (part_list, stock) = import(&ext).unwrap();
        assert_eq!(part_list.len(), 4);
        assert_eq!(part_list.parts()[2].id, 3);
        assert_eq!(part_list.parts()[3].width, 50.0);
        assert_eq!(stock.blade_kerf, 2.0);
    }

    #[test]
    fn rejects_non_positive_request_dimensions() {
        let ext = ext_instance(vec![ExtCutRequest {
            width: 0.0,
            length: 200.0,
            thickness: 40.0,
            demand: 1,
        }]);
        assert!(import(&ext).is_err());
    }

    #[test]
    fn rejects_requests_thicker_than_the_stock() {
        let ext = ext_instance(vec![ExtCutRequest {
            width: 100.0,
            length: 200.0,
            thickness: 301.0,
            demand: 1,
        }]);
        assert!(import(&ext).is_err());
    }

    #[test]
    fn rejects_requests_with_zero_demand() {
        let ext = ext_instance(vec![ExtCutRequest {
            width: 100.0,
            length: 200.0,
            thickness: 40.0,
            demand: 0,
        }]);
        assert!(import(&ext).is_err());
    }
}
