use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::vehicle::VehicleLogic;
use crate::db::log::ttlog_quiet;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::vehicle::VehicleProfile;
use crate::store::VEHICLE_KEY;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::formatting::{money, pad_right};

fn print_profile(v: &VehicleProfile, cur: &str) {
    let rows = [
        ("Model", v.model.clone()),
        ("Year", v.year.to_string()),
        ("Efficiency", format!("{:.1} km/l", v.avg_efficiency_km_l)),
        ("Fuel price", format!("{} / l", money(v.fuel_price_per_liter, cur))),
        ("Vehicle tax", format!("{} / year", money(v.annual_vehicle_tax, cur))),
        (
            "Maintenance",
            format!("{} / year", money(v.annual_maintenance_cost, cur)),
        ),
    ];
    for (label, value) in rows {
        println!("{} {}", pad_right(label, 12), value);
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Vehicle {
        show,
        set,
        clear,
        model,
        year,
        efficiency,
        price,
        tax,
        maintenance,
    } = cmd
    {
        let pool = DbPool::open_ready(&cfg.database)?;

        if *set {
            let missing = |name: &str| AppError::InvalidVehicle(format!("--{name} is required"));
            let profile = VehicleProfile {
                model: model.clone().ok_or_else(|| missing("model"))?,
                year: year.ok_or_else(|| missing("year"))?,
                avg_efficiency_km_l: efficiency.ok_or_else(|| missing("efficiency"))?,
                fuel_price_per_liter: price.ok_or_else(|| missing("price"))?,
                annual_vehicle_tax: *tax,
                annual_maintenance_cost: *maintenance,
            };

            pool.with_persistence(|p| VehicleLogic::save(p, &profile))?;
            success(format!("Vehicle profile saved: {} ({})", profile.model, profile.year));
            ttlog_quiet(
                &pool.conn,
                "vehicle",
                VEHICLE_KEY,
                &format!(
                    "Profile set: {} {} {} km/l",
                    profile.model, profile.year, profile.avg_efficiency_km_l
                ),
            );
        }

        if *clear {
            pool.with_persistence(VehicleLogic::clear)?;
            success("Vehicle profile removed.");
            ttlog_quiet(&pool.conn, "vehicle", VEHICLE_KEY, "Profile cleared");
        }

        if *show {
            let loaded = pool.with_persistence(VehicleLogic::load)?;
            if let Some(reason) = &loaded.problem {
                warning(format!("Stored vehicle profile is unreadable: {reason}"));
            }
            match &loaded.value {
                Some(v) => {
                    header("Vehicle profile");
                    print_profile(v, &cfg.currency_symbol);
                }
                None => info("No vehicle profile configured."),
            }
        }
    }

    Ok(())
}
