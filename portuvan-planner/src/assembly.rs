//! Trip assembly: resolve legs, label stops, accumulate totals.

use std::time::Duration;

use geo::LineString;
use portuvan_core::{
    Itinerary, Leg, LegGeometry, PreferenceMode, RouteSegmentProvider, ScoredLocation, Stop,
    StopChooser, Trip,
};

use crate::generator::ItineraryGenerator;

/// Resolve every leg of `itinerary` through `provider` and build the trip.
///
/// Legs are requested sequentially, one per consecutive stop pair. A failed
/// leg is logged and contributes a straight connector with zero distance and
/// duration, so the trip is always fully labelled.
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use portuvan_core::{Endpoint, Itinerary};
/// use portuvan_core::test_support::FixedRouteProvider;
/// use portuvan_planner::assemble_trip;
///
/// let itinerary = Itinerary::new(Endpoint::lisbon(), Vec::new(), Endpoint::porto());
/// let provider = FixedRouteProvider::new(313_000.0, Duration::from_secs(11_400));
/// let trip = assemble_trip(itinerary, &provider);
/// assert_eq!(trip.stops[1].drive_time, "3h 10m");
/// ```
#[must_use]
pub fn assemble_trip<P>(itinerary: Itinerary, provider: &P) -> Trip
where
    P: RouteSegmentProvider + ?Sized,
{
    let legs: Vec<Leg> = itinerary
        .legs()
        .enumerate()
        .map(|(index, (from, to))| resolve_leg(index, from, to, provider))
        .collect();
    let unavailable = legs.iter().filter(|leg| leg.geometry.is_straight()).count();
    if unavailable > 0 {
        log::info!(
            "{unavailable} of {} legs drawn as straight connectors",
            legs.len()
        );
    }
    Trip::new(itinerary.into_stops(), legs)
}

fn resolve_leg<P>(index: usize, from: &Stop, to: &Stop, provider: &P) -> Leg
where
    P: RouteSegmentProvider + ?Sized,
{
    let straight = || LegGeometry::Straight(LineString::from(vec![from.coord(), to.coord()]));
    match provider.resolve_segment(from.coord(), to.coord()) {
        Ok(segment) => Leg {
            from: from.name().to_owned(),
            to: to.name().to_owned(),
            geometry: segment.geometry.map_or_else(straight, LegGeometry::Routed),
            distance_m: segment.distance_m,
            duration: segment.duration,
        },
        Err(err) => {
            log::warn!(
                "leg {index} from '{}' to '{}' unavailable: {err}",
                from.name(),
                to.name()
            );
            Leg {
                from: from.name().to_owned(),
                to: to.name().to_owned(),
                geometry: straight(),
                distance_m: 0.0,
                duration: Duration::ZERO,
            }
        }
    }
}

/// Generator and routing collaborator bundled for request handling.
///
/// The planner is stateless between calls: each [`plan`](Self::plan) builds
/// a new itinerary and trip.
#[derive(Debug, Clone)]
pub struct TripPlanner<P>
where
    P: RouteSegmentProvider,
{
    generator: ItineraryGenerator,
    provider: P,
}

impl<P> TripPlanner<P>
where
    P: RouteSegmentProvider,
{
    /// Construct a planner with the default generator configuration.
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self::with_generator(ItineraryGenerator::default(), provider)
    }

    /// Construct a planner with an explicit generator.
    #[must_use]
    pub const fn with_generator(generator: ItineraryGenerator, provider: P) -> Self {
        Self {
            generator,
            provider,
        }
    }

    /// Generator in use.
    #[must_use]
    pub const fn generator(&self) -> &ItineraryGenerator {
        &self.generator
    }

    /// Generate an itinerary and assemble it into a trip.
    #[must_use]
    pub fn plan<C>(
        &self,
        locations: &[ScoredLocation],
        preference: PreferenceMode,
        chooser: &mut C,
    ) -> Trip
    where
        C: StopChooser + ?Sized,
    {
        let itinerary = self.generator.generate(locations, preference, chooser);
        assemble_trip(itinerary, &self.provider)
    }
}
