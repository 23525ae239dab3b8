//! Printable registration summary.

use ppdb_schema::{OrangTua, Pilihan, RegistrationRecord, Wali, tanggal_ke_teks};

/// Render the registration letter as plain text, one field per line. Empty
/// fields print as `-`; deceased parents are labeled instead of listing
/// occupation and income.
pub fn render_text(record: &RegistrationRecord) -> String {
    let mut lines = Vec::new();
    lines.push("FORMULIR PENDAFTARAN PESERTA DIDIK BARU".to_string());
    lines.push("=".repeat(52));
    lines.push(String::new());

    let siswa = &record.siswa;
    lines.push("A. DATA SISWA".to_string());
    push_field(&mut lines, "Nama lengkap", &siswa.nama);
    push_field(
        &mut lines,
        "Jenis kelamin",
        &siswa
            .jenis_kelamin
            .map(|jk| jk.label().to_string())
            .unwrap_or_default(),
    );
    push_field(&mut lines, "NISN", siswa.nisn.as_deref().unwrap_or(""));
    push_field(&mut lines, "NIK", siswa.nik.as_deref().unwrap_or(""));
    push_field(&mut lines, "Tempat lahir", &siswa.tempat_lahir);
    push_field(
        &mut lines,
        "Tanggal lahir",
        &siswa.tanggal_lahir.map(tanggal_ke_teks).unwrap_or_default(),
    );
    push_field(
        &mut lines,
        "Agama",
        &pilihan_teks(siswa.agama.as_ref(), |agama| agama.label()),
    );
    push_field(
        &mut lines,
        "Anak ke",
        &siswa.anak_ke.map(|n| n.to_string()).unwrap_or_default(),
    );
    push_field(
        &mut lines,
        "Jumlah saudara",
        &siswa
            .jumlah_saudara
            .map(|n| n.to_string())
            .unwrap_or_default(),
    );
    push_field(
        &mut lines,
        "Tempat tinggal",
        &pilihan_teks(siswa.tempat_tinggal.as_ref(), |tt| tt.label()),
    );
    push_field(
        &mut lines,
        "Transportasi",
        &pilihan_teks(siswa.transportasi.as_ref(), |t| t.label()),
    );

    lines.push(String::new());
    lines.push("B. ALAMAT".to_string());
    let alamat = &siswa.alamat;
    push_field(&mut lines, "Jalan", &alamat.jalan);
    push_field(&mut lines, "Dusun", alamat.dusun.as_deref().unwrap_or(""));
    push_field(&mut lines, "RT/RW", &alamat.rt_rw);
    push_field(&mut lines, "Kode provinsi", &alamat.kode_provinsi);
    push_field(&mut lines, "Kode kabupaten", &alamat.kode_kabupaten);
    push_field(&mut lines, "Kode kecamatan", &alamat.kode_kecamatan);
    push_field(&mut lines, "Kode desa", &alamat.kode_desa);
    push_field(&mut lines, "Kode pos", &alamat.kode_pos);

    lines.push(String::new());
    orang_tua_section(&mut lines, "C. DATA AYAH", &record.ayah);
    lines.push(String::new());
    orang_tua_section(&mut lines, "D. DATA IBU", &record.ibu);
    lines.push(String::new());
    wali_section(&mut lines, &record.wali);

    lines.push(String::new());
    lines.push("F. KONTAK".to_string());
    push_field(
        &mut lines,
        "Telepon ayah",
        telepon_kontak(&record.ayah.nomor_telepon, record.ayah.sudah_meninggal),
    );
    push_field(
        &mut lines,
        "Telepon ibu",
        telepon_kontak(&record.ibu.nomor_telepon, record.ibu.sudah_meninggal),
    );
    push_field(
        &mut lines,
        "Telepon wali",
        record
            .wali
            .as_ref()
            .map(|wali| wali.nomor_telepon.as_str())
            .unwrap_or(""),
    );

    lines.join("\n")
}

fn push_field(lines: &mut Vec<String>, label: &str, value: &str) {
    let shown = if value.trim().is_empty() {
        "-"
    } else {
        value.trim()
    };
    lines.push(format!("   {label:<18}: {shown}"));
}

fn pilihan_teks<T: Copy>(pilihan: Option<&Pilihan<T>>, label: fn(T) -> &'static str) -> String {
    match pilihan {
        None => String::new(),
        Some(Pilihan::Baku(value)) => label(*value).to_string(),
        Some(Pilihan::Lainnya { lainnya }) => format!("Lainnya ({})", lainnya.trim()),
    }
}

fn telepon_kontak(nomor: &str, sudah_meninggal: bool) -> &str {
    if sudah_meninggal { "" } else { nomor }
}

fn orang_tua_section(lines: &mut Vec<String>, judul: &str, orang_tua: &OrangTua) {
    lines.push(judul.to_string());
    push_field(lines, "Nama", &orang_tua.nama);
    if orang_tua.sudah_meninggal {
        push_field(lines, "Keterangan", "Meninggal dunia");
        return;
    }
    push_field(lines, "NIK", orang_tua.nik.as_deref().unwrap_or(""));
    push_field(
        lines,
        "Tahun lahir",
        &orang_tua
            .tahun_lahir
            .map(|tahun| tahun.to_string())
            .unwrap_or_default(),
    );
    push_field(
        lines,
        "Pendidikan",
        orang_tua.pendidikan.map(|p| p.label()).unwrap_or(""),
    );
    push_field(
        lines,
        "Pekerjaan",
        &pilihan_teks(orang_tua.pekerjaan.as_ref(), |p| p.label()),
    );
    push_field(
        lines,
        "Penghasilan",
        orang_tua.penghasilan.map(|p| p.label()).unwrap_or(""),
    );
}

fn wali_section(lines: &mut Vec<String>, wali: &Option<Wali>) {
    lines.push("E. DATA WALI".to_string());
    match wali {
        Some(wali) if !wali.is_kosong() => {
            push_field(lines, "Nama", &wali.nama);
            push_field(lines, "NIK", wali.nik.as_deref().unwrap_or(""));
            push_field(
                lines,
                "Tahun lahir",
                &wali
                    .tahun_lahir
                    .map(|tahun| tahun.to_string())
                    .unwrap_or_default(),
            );
            push_field(
                lines,
                "Pendidikan",
                wali.pendidikan.map(|p| p.label()).unwrap_or(""),
            );
            push_field(
                lines,
                "Pekerjaan",
                &pilihan_teks(wali.pekerjaan.as_ref(), |p| p.label()),
            );
            push_field(
                lines,
                "Penghasilan",
                wali.penghasilan.map(|p| p.label()).unwrap_or(""),
            );
        }
        _ => lines.push("   (tidak diisi)".to_string()),
    }
}
