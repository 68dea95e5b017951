use tomb_flow::{AudioTrackTable, TrackInfo, TrackType};

fn cd_track(number: u32, kind: TrackType) -> TrackInfo {
    TrackInfo::new(format!("audio/{number:03}.ogg"), kind)
}

pub fn tracks() -> AudioTrackTable {
    AudioTrackTable::new()
        .declare("MainTheme", cd_track(2, TrackType::Ambient))
        .declare("Poseidon", cd_track(3, TrackType::Interception))
        .declare("Secret", cd_track(13, TrackType::Interception))
        .declare("Danger", cd_track(15, TrackType::Interception))
        .declare("LaraTalk", cd_track(18, TrackType::Interception))
        .declare("Cutscene1", cd_track(23, TrackType::Interception))
        .declare("Cutscene2", cd_track(25, TrackType::Interception))
        .declare("Cutscene3", cd_track(24, TrackType::Interception))
        .declare("Cutscene4", cd_track(22, TrackType::Interception))
        .declare("TRexEncounter", cd_track(51, TrackType::Interception))
        .declare("Ambience1", cd_track(57, TrackType::Ambient))
        .declare("Ambience2", cd_track(58, TrackType::Ambient))
        .declare("Ambience3", cd_track(59, TrackType::Ambient))
        .declare("Ambience4", cd_track(60, TrackType::Ambient))
        .declare("Waterfall", cd_track(61, TrackType::AmbientEffect))
}
