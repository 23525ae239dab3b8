use ppdb_schema::{
    Agama, Alamat, JenisKelamin, OrangTua, Pekerjaan, Pendidikan, Penghasilan, Pilihan,
    RegistrationRecord, Siswa, TempatTinggal, Transportasi,
};
use time::macros::date;

/// The acceptance-case record: complete, no guardian, father carries the
/// contact phone.
pub fn record_lengkap() -> RegistrationRecord {
    RegistrationRecord {
        siswa: Siswa {
            nama: "MUHAMMAD ZIDAN AL-FARISI".into(),
            jenis_kelamin: Some(JenisKelamin::LakiLaki),
            nisn: Some("0123456789".into()),
            nik: Some("3524123456789001".into()),
            tempat_lahir: "Lamongan".into(),
            tanggal_lahir: Some(date!(2012 - 07 - 17)),
            agama: Some(Pilihan::Baku(Agama::Islam)),
            anak_ke: Some(1),
            jumlah_saudara: Some(2),
            alamat: Alamat {
                jalan: "Jl. Veteran No. 12".into(),
                dusun: Some("Krajan".into()),
                rt_rw: "3/12".into(),
                kode_provinsi: "35".into(),
                kode_kabupaten: "3524".into(),
                kode_kecamatan: "352411".into(),
                kode_desa: "3524110001".into(),
                kode_pos: "62212".into(),
            },
            tempat_tinggal: Some(Pilihan::Baku(TempatTinggal::BersamaOrangTua)),
            transportasi: Some(Pilihan::Baku(Transportasi::AntarJemputSekolah)),
        },
        ayah: OrangTua {
            nama: "AHMAD SUBAGIYO".into(),
            nik: Some("3524123456780002".into()),
            tahun_lahir: Some(1980),
            pendidikan: Some(Pendidikan::Sma),
            pekerjaan: Some(Pilihan::Baku(Pekerjaan::Wiraswasta)),
            penghasilan: Some(Penghasilan::Antara1JutaSampai2Juta),
            nomor_telepon: "081234567890".into(),
            sudah_meninggal: false,
        },
        ibu: OrangTua {
            nama: "SITI MAIMUNAH".into(),
            pendidikan: Some(Pendidikan::Smp),
            pekerjaan: Some(Pilihan::Baku(Pekerjaan::TidakBekerja)),
            ..OrangTua::default()
        },
        wali: None,
    }
}
